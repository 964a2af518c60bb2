//! Status bar rendering with keybindings and playback indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `progress` is `(cursor, total)` when a trace is loaded.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    progress: Option<(usize, usize)>,
    is_playing: bool,
    speed: f64,
    is_editing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step tag and status message
    let step_text = match progress {
        Some((cursor, total)) => format!(" Step {}/{} ", cursor + 1, total),
        None => " Idle ".to_string(),
    };

    let tag_bg = if is_playing {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.primary
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(tag_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.cell_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.cell_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.cell_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, swapped out wholesale while editing
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.cell_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.cell_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = if is_editing {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" run ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        let mut spans = vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" +/- ", key_style),
            Span::styled(format!(" {:.1}x ", speed), desc_style),
            Span::styled("│", sep_style),
            Span::styled(" 1-7 r ", key_style),
            Span::styled(" demo ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" i ", key_style),
            Span::styled(" input ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", desc_style),
        ];
        if is_playing {
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(
                " ▶ ",
                Style::default()
                    .bg(DEFAULT_THEME.success)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        spans
    };

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.cell_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
