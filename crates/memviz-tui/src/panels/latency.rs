//! Access latency as vertical bars, on a log or linear scale.

use std::time::Instant;

use memviz_core::charts::{self, ChartOptions};
use memviz_core::renderer::BarRenderer;
use memviz_core::scale::ScaleMode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::debug;

use super::{Panel, PanelKind};
use crate::geometry::{cells, Hitbox};
use crate::keymap::KeyAction;
use crate::styles::{tag_color, ColorTheme};

const HINTS: [(&str, &str); 1] = [("s", "scale")];

/// Areas of the latency panel.
struct Regions {
    chart: Rect,
    names: Rect,
    values: Rect,
    note: Rect,
}

/// Latency graph panel.
pub struct LatencyPanel {
    bars: BarRenderer,
}

impl LatencyPanel {
    #[must_use]
    pub fn new(opts: &ChartOptions) -> Self {
        Self {
            bars: charts::latency(opts),
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(ColorTheme::default().border_style())
            .title(format!(" Memory Access Latency ({} scale) ", self.bars.scale()))
    }

    fn regions(&self, area: Rect) -> Regions {
        let inner = self.block().inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);
        Regions {
            chart: rows[0],
            names: rows[1],
            values: rows[2],
            note: rows[3],
        }
    }

    /// Column `i` of `n` equal columns across `area`.
    fn column(area: Rect, i: usize, n: usize) -> Rect {
        let n = u16::try_from(n.max(1)).unwrap_or(u16::MAX);
        let i = u16::try_from(i).unwrap_or(u16::MAX);
        let width = area.width / n;
        Rect::new(area.x + i.saturating_mul(width), area.y, width, area.height)
    }

    fn note(&self) -> &'static str {
        match self.bars.scale() {
            ScaleMode::Logarithmic => "Logarithmic scale: each step up is roughly ten times slower",
            _ => "Linear scale: caches all but vanish next to the SSD",
        }
    }
}

impl Panel for LatencyPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Latency
    }

    fn primary(&self) -> &BarRenderer {
        &self.bars
    }

    fn primary_mut(&mut self) -> &mut BarRenderer {
        &mut self.bars
    }

    fn mount(&mut self, now: Instant) {
        self.bars.mount(now);
    }

    fn unmount(&mut self) {
        self.bars.unmount();
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.bars.tick(now)
    }

    fn hitboxes(&self, area: Rect, _now: Instant) -> Vec<Hitbox> {
        let regions = self.regions(area);
        let span = Rect {
            height: regions.chart.height + regions.names.height + regions.values.height,
            ..regions.chart
        };
        let n = self.bars.len();
        (0..n)
            .map(|i| Hitbox::new(i, Self::column(span, i, n)))
            .filter(|hb| hb.area.width > 0)
            .collect()
    }

    fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = ColorTheme::default();
        frame.render_widget(self.block(), area);
        let regions = self.regions(area);
        let n = self.bars.len();

        for (i, record) in self.bars.dataset().iter().enumerate() {
            let column = Self::column(regions.chart, i, n);
            if column.width == 0 {
                continue;
            }
            let selected = self.bars.selection().is_selected(i);

            let extent = self.bars.extent_percent(i, now);
            let height = cells(extent, column.height).max(u16::from(extent > 0.0));
            let bar_width = column.width.saturating_sub(2).max(1);
            let bar = Rect::new(
                column.x + (column.width - bar_width) / 2,
                column.y + column.height - height,
                bar_width,
                height,
            );
            let color = if selected { theme.accent } else { tag_color(record.color) };
            frame.render_widget(Block::default().style(Style::default().bg(color)), bar);

            let name_style = if selected { theme.selected_style() } else { theme.text_style() };
            let name: String = record.label.chars().take(usize::from(column.width)).collect();
            frame.render_widget(
                Paragraph::new(Span::styled(name, name_style)).alignment(Alignment::Center),
                Rect { y: regions.names.y, height: 1, ..column },
            );
            frame.render_widget(
                Paragraph::new(Span::styled(record.value_text(), theme.muted_style()))
                    .alignment(Alignment::Center),
                Rect { y: regions.values.y, height: 1, ..column },
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(self.note(), theme.muted_style())),
            regions.note,
        );
    }

    fn handle_action(&mut self, action: KeyAction, _now: Instant) -> bool {
        if action != KeyAction::ToggleScale {
            return false;
        }
        let scale = self.bars.scale().toggled();
        self.bars.set_scale(scale);
        debug!(%scale, "latency scale switched");
        true
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &HINTS
    }
}
