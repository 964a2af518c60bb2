//! Step pane: which phase the current snapshot belongs to, and why

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the current step's phase label and explanation
pub fn render_step_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    cursor: Option<usize>,
    total: usize,
) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let (Some(snapshot), Some(cursor)) = (snapshot, cursor) else {
        let paragraph = Paragraph::new("(idle: start a run to see the algorithm walk the string)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let phase = snapshot.phase();
    let mut title_spans = vec![
        Span::styled(
            format!("Step {}/{}", cursor + 1, total),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::raw("  "),
        Span::styled(
            phase.label(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(duplicate) = snapshot.duplicate_char() {
        title_spans.push(Span::styled(
            format!("  '{}'", duplicate),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            phase.explanation(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
