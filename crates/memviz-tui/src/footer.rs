//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Key hints shown on every panel.
const COMMON_HINTS: [(&str, &str); 5] = [
    ("q", "quit"),
    ("tab", "panel"),
    ("←/→", "select"),
    ("enter", "toggle"),
    ("esc", "clear"),
];

/// Render the footer panel with keyboard shortcuts, followed by `extra` panel hints.
pub fn render_footer(frame: &mut Frame, area: Rect, extra: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, what)) in COMMON_HINTS.iter().chain(extra).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {what}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
