//! Three-address code pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ParseError;
use crate::tac::{Instruction, UNKNOWN_VALUE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

fn is_temporary(operand: &str) -> bool {
    operand.len() > 1
        && operand.starts_with('t')
        && operand[1..].bytes().all(|b| b.is_ascii_digit())
}

fn operand_style(operand: &str) -> Style {
    if operand == UNKNOWN_VALUE {
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::ITALIC)
    } else if is_temporary(operand) {
        Style::default().fg(DEFAULT_THEME.temporary)
    } else if operand.bytes().all(|b| b.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if operand.starts_with('"') {
        Style::default().fg(DEFAULT_THEME.string)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

fn instruction_line(index: usize, instruction: &Instruction) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:4} ", index),
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    if instruction.is_label() {
        spans.push(Span::styled(
            instruction.op.clone(),
            Style::default()
                .fg(DEFAULT_THEME.label)
                .add_modifier(Modifier::BOLD),
        ));
        return Line::from(spans);
    }

    spans.push(Span::raw("    "));
    spans.push(Span::styled(
        instruction.op.clone(),
        Style::default().fg(DEFAULT_THEME.keyword),
    ));
    let is_jump = matches!(instruction.op.as_str(), "goto" | "if" | "ifFalse");
    let fields = [
        (&instruction.arg1, false),
        (&instruction.arg2, is_jump),
        (&instruction.result, is_jump),
    ];
    for (field, is_jump_part) in fields {
        if field.is_empty() {
            continue;
        }
        let style = if is_jump_part {
            Style::default().fg(DEFAULT_THEME.label)
        } else {
            operand_style(field)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(field.clone(), style));
    }

    Line::from(spans)
}

/// Render the TAC pane, or the syntax error when there is no code.
pub fn render_tac_pane(
    frame: &mut Frame,
    area: Rect,
    code: Result<&[Instruction], &ParseError>,
    is_compatible: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if is_compatible {
        " Three-Address Code (compatible) "
    } else {
        " Three-Address Code "
    };
    let block = pane_block(title, is_focused);

    let code = match code {
        Ok(code) => code,
        Err(error) => {
            let paragraph = Paragraph::new(error.to_string())
                .block(block)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(DEFAULT_THEME.error));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    if code.is_empty() {
        let paragraph = Paragraph::new("(no instructions)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, code.len(), visible_height);

    let items: Vec<ListItem> = code
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, instruction)| ListItem::new(instruction_line(index, instruction)))
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
