//! Best-result pane: the longest duplicate-free substring found so far

use crate::snapshot::{Phase, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the best substring found so far
pub fn render_answer_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(" Longest Substring ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no result yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let just_updated = snapshot.phase() == Phase::UpdateBest;
    let mut best_style = Style::default().fg(DEFAULT_THEME.success);
    if just_updated {
        best_style = best_style.add_modifier(Modifier::BOLD);
    }

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let lines = vec![
        Line::from(vec![
            Span::styled("Best: ", label_style),
            Span::styled(format!("\"{}\"", snapshot.best_substring()), best_style),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label_style),
            Span::styled(snapshot.best_len().to_string(), best_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
