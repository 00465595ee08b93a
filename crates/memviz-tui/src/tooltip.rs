//! Detail tooltip for the selected record.

use memviz_core::renderer::Tooltip;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::geometry::tooltip_rect;
use crate::styles::ColorTheme;

/// Lines of a tooltip box.
#[must_use]
pub fn tooltip_lines(tooltip: &Tooltip) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            tooltip.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(tooltip.value.clone()),
        Line::from(Span::styled(
            tooltip.description.clone(),
            ColorTheme::default().muted_style(),
        )),
    ]
}

/// Draw `tooltip` next to `anchor`, clipped to `bounds`.
#[allow(clippy::cast_possible_truncation)]
pub fn render_tooltip(frame: &mut Frame, anchor: Rect, bounds: Rect, tooltip: &Tooltip) {
    let lines = tooltip_lines(tooltip);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = (content_width + 2).min(usize::from(u16::MAX)) as u16;
    let height = lines.len() as u16 + 2;

    let area = tooltip_rect(anchor, width, height, bounds);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let theme = ColorTheme::default();
    let paragraph = Paragraph::new(lines)
        .style(theme.tooltip_style())
        .block(Block::default().borders(Borders::ALL).style(theme.tooltip_style()));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
