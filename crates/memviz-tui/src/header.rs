//! TUI header panel: title and panel tabs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

/// Render the header with the tab bar, highlighting `active`.
pub fn render_header(frame: &mut Frame, area: Rect, titles: &[&str], active: usize) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(Span::styled(" Memory Deep Dive ", Style::default().fg(Color::Cyan)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let tabs = Tabs::new(
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!("{} {t}", i + 1))),
    )
    .select(active)
    .style(Style::default().fg(Color::Gray))
    .highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .divider("|");

    let tabs_area = Rect { height: 1, ..inner };
    frame.render_widget(tabs, tabs_area);
}
