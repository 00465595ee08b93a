//! Memory hierarchy pyramid: one speed and one capacity gauge per level.

use std::time::Instant;

use memviz_core::charts::{self, ChartOptions};
use memviz_core::datasets::MEMORY_LEVELS;
use memviz_core::renderer::BarRenderer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use super::{Panel, PanelKind};
use crate::geometry::Hitbox;
use crate::styles::{tag_color, ColorTheme};

const ROWS_PER_LEVEL: u16 = 2;

/// Registers to SSD with speed and capacity side by side.
pub struct HierarchyPanel {
    speed: BarRenderer,
    capacity: BarRenderer,
}

impl HierarchyPanel {
    #[must_use]
    pub fn new(opts: &ChartOptions) -> Self {
        Self {
            speed: charts::hierarchy_speed(opts),
            capacity: charts::hierarchy_capacity(opts),
        }
    }

    /// Capacity renderer; the speed renderer is the primary one.
    #[must_use]
    pub fn capacity(&self) -> &BarRenderer {
        &self.capacity
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(ColorTheme::default().border_style())
            .title(" Memory Hierarchy: faster at the top, larger at the bottom ")
    }

    /// Two-row band of each level inside `area`, skipping levels that do not fit.
    fn level_rects(&self, area: Rect) -> Vec<Rect> {
        let inner = Self::block().inner(area);
        let mut rects = Vec::with_capacity(self.speed.len());
        for i in 0..self.speed.len() {
            let Ok(offset) = u16::try_from(i) else { break };
            let y = inner.y + offset * ROWS_PER_LEVEL;
            if y + ROWS_PER_LEVEL > inner.y + inner.height {
                break;
            }
            rects.push(Rect::new(inner.x, y, inner.width, ROWS_PER_LEVEL));
        }
        rects
    }

    fn render_level(&self, frame: &mut Frame, area: Rect, i: usize, now: Instant) {
        let theme = ColorTheme::default();
        let Some(level) = MEMORY_LEVELS.get(i) else {
            return;
        };
        let selected = self.speed.selection().is_selected(i);
        let color = tag_color(level.color);

        let name_style = if selected {
            theme.selected_style()
        } else {
            theme.text_style().add_modifier(Modifier::BOLD)
        };
        let marker = if selected { "▶ " } else { "  " };
        let title = Line::from(vec![
            Span::styled(marker, theme.selected_style()),
            Span::styled(level.name, name_style),
            Span::styled(
                format!("  {} · {} · cost {}", level.size, level.speed, level.cost),
                theme.muted_style(),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title),
            Rect::new(area.x, area.y, area.width, 1),
        );

        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(2), 1));

        for (renderer, caption, rect) in [
            (&self.speed, "Speed", gauges[0]),
            (&self.capacity, "Capacity", gauges[1]),
        ] {
            let extent = renderer.extent_percent(i, now);
            let label = format!("{caption} {:.0}%", renderer.display_percent(i));
            let gauge = Gauge::default()
                .gauge_style(theme.bar_style(color))
                .ratio((extent / 100.0).clamp(0.0, 1.0))
                .label(Span::styled(label, theme.text_style()))
                .use_unicode(true);
            frame.render_widget(gauge, Rect::new(rect.x, rect.y, rect.width.saturating_sub(1), 1));
        }
    }
}

impl Panel for HierarchyPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Hierarchy
    }

    fn primary(&self) -> &BarRenderer {
        &self.speed
    }

    fn primary_mut(&mut self) -> &mut BarRenderer {
        &mut self.speed
    }

    fn mount(&mut self, now: Instant) {
        self.speed.mount(now);
        self.capacity.mount(now);
    }

    fn unmount(&mut self) {
        self.speed.unmount();
        self.capacity.unmount();
    }

    fn tick(&mut self, now: Instant) -> bool {
        let speed = self.speed.tick(now);
        let capacity = self.capacity.tick(now);
        speed || capacity
    }

    fn hitboxes(&self, area: Rect, _now: Instant) -> Vec<Hitbox> {
        self.level_rects(area)
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Hitbox::new(i, rect))
            .collect()
    }

    fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        frame.render_widget(Self::block(), area);
        for (i, rect) in self.level_rects(area).into_iter().enumerate() {
            self.render_level(frame, rect, i, now);
        }
    }
}
