//! Input string pane: one cell per character, window highlight, pointer markers
//!
//! Long inputs wrap into multiple cell rows so a 50-character string still
//! fits an 80-column terminal; each cell row carries a marker row beneath it
//! with the `L`/`R` pointer positions.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Three columns per cell plus one gap column
const CELL_WIDTH: usize = 4;

/// Render the input string pane
pub fn render_string_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(" String ")
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

    let chars: Vec<char> = snapshot.input().chars().collect();
    let inner_width = area.width.saturating_sub(4).max(CELL_WIDTH as u16) as usize;
    let per_row = (inner_width / CELL_WIDTH).max(1);

    let duplicate = snapshot.duplicate_char();
    let mut lines: Vec<Line> = Vec::new();

    for (row, chunk) in chars.chunks(per_row).enumerate() {
        let base = row * per_row;
        let mut cells: Vec<Span> = Vec::new();
        let mut markers: Vec<Span> = Vec::new();

        for (offset, &ch) in chunk.iter().enumerate() {
            let index = base + offset;
            let in_window = snapshot.in_window(index);

            let mut cell_style = Style::default().fg(DEFAULT_THEME.fg).bg(if in_window {
                DEFAULT_THEME.window_bg
            } else {
                DEFAULT_THEME.cell_bg
            });
            if in_window && duplicate == Some(ch) {
                cell_style = cell_style
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD);
            }
            cells.push(Span::styled(format!(" {} ", ch), cell_style));
            cells.push(Span::raw(" "));

            let (marker, color) = pointer_marker(snapshot, index);
            markers.push(Span::styled(
                format!("{:^3}", marker),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            markers.push(Span::raw(" "));
        }

        if row > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(cells));
        lines.push(Line::from(markers));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Marker text and color for the pointer row under character `index`
fn pointer_marker(snapshot: &Snapshot, index: usize) -> (&'static str, ratatui::style::Color) {
    // No markers before the scan has started
    let Some(right) = snapshot.right() else {
        return ("", DEFAULT_THEME.comment);
    };
    let at_left = snapshot.left() == index;
    let at_right = right == index;
    match (at_left, at_right) {
        (true, true) => ("LR", DEFAULT_THEME.pointer_right),
        (true, false) => ("L", DEFAULT_THEME.pointer_left),
        (false, true) => ("R", DEFAULT_THEME.pointer_right),
        (false, false) => ("", DEFAULT_THEME.comment),
    }
}
