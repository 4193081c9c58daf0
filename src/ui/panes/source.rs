//! Source code pane rendering with syntax highlighting
//!
//! Highlighting reuses the lexer's word classification, so what is colored as
//! a keyword here is exactly what the parser sees as one.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::lexer::{classify, is_symbol, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one source line
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_whitespace() || is_symbol(c) {
            if !current_word.is_empty() {
                spans.push(style_word(std::mem::take(&mut current_word)));
            }

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            continue;
        }

        current_word.push(c);
    }

    if !current_word.is_empty() {
        spans.push(style_word(current_word));
    }

    Line::from(spans)
}

fn style_word(word: String) -> Span<'static> {
    let style = match word.as_str() {
        "int" | "string" | "void" => Style::default().fg(DEFAULT_THEME.type_name),
        _ => match classify(&word) {
            TokenKind::Keyword => Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
            TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
            TokenKind::Identifier if word.starts_with('"') => {
                Style::default().fg(DEFAULT_THEME.string)
            }
            _ => Style::default().fg(DEFAULT_THEME.fg),
        },
    };
    Span::styled(word, style)
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num_str = format!("{:4} ", idx + 1);
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default().fg(DEFAULT_THEME.comment), // Line numbers
            )];
            spans.extend(highlight_source_code(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
