//! Symbol and function table pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::TypeTag;
use crate::semantic::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn type_style(type_tag: TypeTag) -> Style {
    match type_tag {
        TypeTag::Unknown => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(DEFAULT_THEME.type_name),
    }
}

fn header(columns: &[(&str, usize)]) -> Line<'static> {
    let text: String = columns
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = *width))
        .collect();
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build every row of the pane, variables first, then functions.
fn table_lines(analysis: &Analysis) -> Vec<Line<'static>> {
    let mut lines = vec![header(&[("Variable", 14), ("Type", 9), ("Scope", 0)])];

    for symbol in &analysis.symbols {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", symbol.name),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(format!("{:<9}", symbol.type_tag), type_style(symbol.type_tag)),
            Span::styled(
                symbol.scope.clone(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(header(&[("Function", 14), ("Return", 0)]));

    for function in &analysis.functions {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", function.name),
                Style::default().fg(DEFAULT_THEME.label),
            ),
            Span::styled(
                function.return_type.to_string(),
                type_style(function.return_type),
            ),
        ]));
    }

    lines
}

/// Render the symbols pane. `analysis` is `None` when parsing failed.
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    analysis: Option<&Analysis>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Symbols ", is_focused);

    let Some(analysis) = analysis else {
        let paragraph = Paragraph::new("(no symbols: parse failed)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = table_lines(analysis);
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
