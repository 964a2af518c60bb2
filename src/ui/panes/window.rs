//! Current window pane: window substring and its character set

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the current window and its unique-character set
pub fn render_window_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(" Window ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no run)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let window_line = if snapshot.window_len() == 0 {
        Line::from(vec![
            Span::styled("Window: ", label_style),
            Span::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Window: ", label_style),
            Span::styled(
                format!("\"{}\"", snapshot.window()),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled(
                format!("  len {}", snapshot.window_len()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ])
    };

    // FxHashSet iteration order is arbitrary; sort for a stable display
    let mut set: Vec<char> = snapshot.window_chars().into_iter().collect();
    set.sort_unstable();

    let mut set_spans = vec![Span::styled("Char set: ", label_style)];
    if set.is_empty() {
        set_spans.push(Span::styled("{}", Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        for ch in set {
            set_spans.push(Span::styled(
                format!(" {} ", ch),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.cell_bg),
            ));
            set_spans.push(Span::raw(" "));
        }
    }

    let paragraph = Paragraph::new(vec![window_line, Line::from(set_spans)]).block(block);
    frame.render_widget(paragraph, area);
}
