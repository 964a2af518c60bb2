//! Input bar: the string under edit, or the one currently loaded

use crate::input::InputError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the input bar at the top of the screen
pub fn render_input_bar(
    frame: &mut Frame,
    area: Rect,
    loaded: Option<&str>,
    edit_buffer: Option<&str>,
    error: Option<&InputError>,
) {
    let editing = edit_buffer.is_some();
    let border_style = if editing {
        Style::default()
            .fg(DEFAULT_THEME.border_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border)
    };

    let title = if editing { " Input (editing) " } else { " Input " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut spans: Vec<Span> = Vec::new();
    match (edit_buffer, loaded) {
        (Some(buffer), _) => {
            spans.push(Span::styled(
                buffer.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
            spans.push(Span::styled(
                "█",
                Style::default().fg(DEFAULT_THEME.border_active),
            ));
            if let Some(error) = error {
                spans.push(Span::styled(
                    format!("  ✗ {}", error),
                    Style::default().fg(DEFAULT_THEME.error),
                ));
            }
        }
        (None, Some(loaded)) => {
            spans.push(Span::styled(
                format!("\"{}\"", loaded),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
            spans.push(Span::styled(
                format!("  ({} chars)", loaded.chars().count()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        (None, None) => {
            spans.push(Span::styled(
                "(press i to enter a string, 1-7 for examples, r for random)",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
