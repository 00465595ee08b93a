//! Cache hit rate: a ring for the hit share plus hit and miss gauges.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Instant;

use memviz_core::charts::{self, ChartOptions};
use memviz_core::datasets::CacheScenario;
use memviz_core::renderer::BarRenderer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs};
use ratatui::Frame;
use tracing::debug;

use super::{Panel, PanelKind};
use crate::geometry::Hitbox;
use crate::keymap::KeyAction;
use crate::styles::{tag_color, ColorTheme};

const HINTS: [(&str, &str); 1] = [("n", "scenario")];

/// Points sampled around the full ring.
const RING_SAMPLES: usize = 180;

const HITS: usize = 0;

struct Regions {
    tabs: Rect,
    description: Rect,
    ring: Rect,
    gauges: [Rect; 2],
    legend: Rect,
}

/// Cache panel for the current access pattern.
pub struct CachePanel {
    scenario: CacheScenario,
    bars: BarRenderer,
}

impl CachePanel {
    #[must_use]
    pub fn new(opts: &ChartOptions) -> Self {
        Self {
            scenario: opts.scenario,
            bars: charts::cache(opts),
        }
    }

    /// Scenario currently shown.
    #[must_use]
    pub fn scenario(&self) -> CacheScenario {
        self.scenario
    }

    /// Switch to `scenario`, animating from the values on screen.
    pub fn set_scenario(&mut self, scenario: CacheScenario, now: Instant) {
        self.scenario = scenario;
        self.bars.retarget(scenario.dataset(), now);
        debug!(%scenario, "cache scenario switched");
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(ColorTheme::default().border_style())
            .title(" Cache Performance ")
    }

    fn regions(area: Rect) -> Regions {
        let inner = Self::block().inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Min(3)])
            .split(inner);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[2]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
            .split(body[1]);
        Regions {
            tabs: rows[0],
            description: rows[1],
            ring: body[0],
            gauges: [right[0], right[1]],
            legend: right[2],
        }
    }

    /// Points of a unit circle from twelve o'clock, clockwise, covering `fraction` of it.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn arc(fraction: f64) -> Vec<(f64, f64)> {
        let fraction = fraction.clamp(0.0, 1.0);
        let samples = (RING_SAMPLES as f64 * fraction).round() as usize;
        (0..samples)
            .map(|k| {
                let angle = FRAC_PI_2 - TAU * k as f64 / RING_SAMPLES as f64;
                (angle.cos(), angle.sin())
            })
            .collect()
    }

    fn render_ring(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = ColorTheme::default();
        let track = Self::arc(1.0);
        let filled = Self::arc(self.bars.visual_percent(HITS, now) / 100.0);
        let color = self
            .bars
            .dataset()
            .get(HITS)
            .map_or(theme.primary, |r| tag_color(r.color));
        let label = format!("{:.0}%", self.bars.display_percent(HITS));

        let canvas = Canvas::default()
            .block(Block::default().title(" Hit Rate "))
            .marker(Marker::Braille)
            .x_bounds([-1.3, 1.3])
            .y_bounds([-1.3, 1.3])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: theme.track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &filled,
                    color,
                });
                ctx.print(-0.2, 0.0, Line::from(label.clone()));
            });
        frame.render_widget(canvas, area);
    }
}

impl Panel for CachePanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Cache
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
        let regions = Self::regions(area);
        regions
            .gauges
            .into_iter()
            .take(self.bars.len())
            .enumerate()
            .filter(|(_, rect)| !rect.is_empty())
            .map(|(i, rect)| Hitbox::new(i, rect))
            .collect()
    }

    fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = ColorTheme::default();
        frame.render_widget(Self::block(), area);
        let regions = Self::regions(area);

        let tabs = Tabs::new(CacheScenario::ALL.iter().map(|s| s.title()))
            .select(self.scenario.index())
            .style(theme.muted_style())
            .highlight_style(theme.header_style())
            .divider("|");
        frame.render_widget(tabs, regions.tabs);
        frame.render_widget(
            Paragraph::new(Span::styled(self.scenario.description(), theme.text_style())),
            regions.description,
        );

        self.render_ring(frame, regions.ring, now);

        let mut legend = Vec::new();
        for (i, record) in self.bars.dataset().iter().enumerate().take(regions.gauges.len()) {
            let selected = self.bars.selection().is_selected(i);
            let border = if selected { theme.selected_style() } else { theme.muted_style() };
            let color = tag_color(record.color);
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(format!(" {} ", record.label)),
                )
                .gauge_style(theme.bar_style(color))
                .ratio((self.bars.extent_percent(i, now) / 100.0).clamp(0.0, 1.0))
                .label(format!("{:.0}%", self.bars.display_percent(i)))
                .use_unicode(true);
            frame.render_widget(gauge, regions.gauges[i]);

            legend.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(record.label.clone(), theme.text_style()),
                Span::styled(format!(": {}", record.description), theme.muted_style()),
            ]));
        }
        frame.render_widget(Paragraph::new(legend), regions.legend);
    }

    fn handle_action(&mut self, action: KeyAction, now: Instant) -> bool {
        if action != KeyAction::NextScenario {
            return false;
        }
        self.set_scenario(self.scenario.next(), now);
        true
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &HINTS
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use memviz_core::constants::{CACHE_DELAY, CACHE_TRANSITION};
    use memviz_core::selection::SelectionEvent;

    use super::*;
    use crate::panels::test_support::{render_rows, settle};

    #[test]
    fn arc_covers_fraction_of_ring() {
        assert!(CachePanel::arc(0.0).is_empty());
        assert_eq!(CachePanel::arc(1.0).len(), RING_SAMPLES);
        assert_eq!(CachePanel::arc(0.5).len(), RING_SAMPLES / 2);
        let (x, y) = CachePanel::arc(1.0)[0];
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn settled_panel_shows_scenario_rates() {
        let mut panel = CachePanel::new(&ChartOptions::default());
        let now = settle(&mut panel, Instant::now());
        let text = render_rows(&panel, 100, 20, now).concat();
        assert!(text.contains("Sequential Access"));
        assert!(text.contains("85%"));
        assert!(text.contains("15%"));
    }

    #[test]
    fn next_scenario_keeps_old_values_until_fire() {
        let mut panel = CachePanel::new(&ChartOptions::default());
        let settled = settle(&mut panel, Instant::now());
        assert!(panel.handle_action(KeyAction::NextScenario, settled));
        assert_eq!(panel.scenario(), CacheScenario::Random);
        assert!((panel.primary().display_percent(0) - 85.0).abs() < 1e-9);

        assert!(panel.tick(settled + CACHE_DELAY));
        assert!((panel.primary().display_percent(0) - 45.0).abs() < 1e-9);
        let done = settled + CACHE_DELAY + CACHE_TRANSITION;
        assert!((panel.primary().extent_percent(1, done) - 55.0).abs() < 1e-9);
    }

    #[test]
    fn scenarios_wrap_around() {
        let mut panel = CachePanel::new(&ChartOptions::default());
        let now = Instant::now();
        for _ in 0..3 {
            panel.handle_action(KeyAction::NextScenario, now);
        }
        assert_eq!(panel.scenario(), CacheScenario::Sequential);
    }

    #[test]
    fn gauges_are_hit_targets() {
        let mut panel = CachePanel::new(&ChartOptions::default());
        let area = Rect::new(0, 0, 100, 20);
        let boxes = panel.hitboxes(area, Instant::now());
        assert_eq!(boxes.len(), 2);
        let misses = boxes[1].area;
        let hit = panel.hit_test(area, Instant::now(), misses.x + 1, misses.y + 1, true);
        assert_eq!(hit, Some(1));
        panel.select(SelectionEvent::Click(1));
        assert_eq!(panel.tooltip().unwrap().value, "15%");
    }

    #[test]
    fn unmount_before_fire_leaves_zeros() {
        let mut panel = CachePanel::new(&ChartOptions::default());
        let t0 = Instant::now();
        panel.mount(t0);
        panel.unmount();
        assert!(!panel.tick(t0 + Duration::from_secs(2)));
        assert!(panel.primary().display_percentages().iter().all(|p| *p == 0.0));
    }
}
