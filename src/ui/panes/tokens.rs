//! Token stream pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Symbol => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Unknown => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Render the token pane.
///
/// `error_position` marks the token a syntax error was reported at. A position
/// one past the end means the error was at end of input and nothing is marked.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    error_position: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(position, token)| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:4} ", position),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<11}", token.kind), kind_style(token.kind)),
                Span::styled(token.text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);

            if error_position == Some(position) {
                ListItem::new(line).style(
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
