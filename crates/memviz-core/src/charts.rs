//! Preconfigured renderers for each visualization.

use std::time::Duration;

use crate::constants::{
    CACHE_DELAY, CACHE_TRANSITION, CAPACITY_MIN_PERCENT, HIERARCHY_DELAY, HIERARCHY_TRANSITION,
    LATENCY_DELAY, LATENCY_MIN_PERCENT, LATENCY_TRANSITION, LAYOUT_DELAY, LAYOUT_TRANSITION,
    SEGMENT_LABEL_MIN_PERCENT,
};
use crate::datasets::{self, CacheScenario};
use crate::renderer::BarRenderer;
use crate::scale::{Floor, ScaleMode};
use crate::state::AnimationTiming;

/// Smallest non-zero floor for strip segments; frontends round it up to one cell.
const SEGMENT_MIN_PERCENT: f64 = 1.0;

/// Knobs shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Overrides every chart's mount delay.
    pub delay: Option<Duration>,
    /// Overrides every chart's transition length.
    pub transition: Option<Duration>,
    /// Scale of the latency graph.
    pub latency_scale: ScaleMode,
    /// Initial cache scenario.
    pub scenario: CacheScenario,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            delay: None,
            transition: None,
            latency_scale: ScaleMode::Logarithmic,
            scenario: CacheScenario::Sequential,
        }
    }
}

impl ChartOptions {
    /// Timing for a chart whose defaults are `delay` and `transition`.
    #[must_use]
    pub fn timing(&self, delay: Duration, transition: Duration) -> AnimationTiming {
        AnimationTiming::new(
            self.delay.unwrap_or(delay),
            self.transition.unwrap_or(transition),
        )
    }
}

/// Hierarchy "speed" bars: inverse of access time.
#[must_use]
pub fn hierarchy_speed(opts: &ChartOptions) -> BarRenderer {
    BarRenderer::new(datasets::hierarchy_access(), ScaleMode::Inverse)
        .with_timing(opts.timing(HIERARCHY_DELAY, HIERARCHY_TRANSITION))
}

/// Hierarchy capacity bars, linear with a small floor so registers stay visible.
#[must_use]
pub fn hierarchy_capacity(opts: &ChartOptions) -> BarRenderer {
    BarRenderer::new(datasets::hierarchy_capacity(), ScaleMode::Linear)
        .with_floor(Floor::Always(CAPACITY_MIN_PERCENT))
        .with_timing(opts.timing(HIERARCHY_DELAY, HIERARCHY_TRANSITION))
}

/// Latency graph.
#[must_use]
pub fn latency(opts: &ChartOptions) -> BarRenderer {
    BarRenderer::new(datasets::latency(), opts.latency_scale)
        .with_floor(Floor::Always(LATENCY_MIN_PERCENT))
        .with_timing(opts.timing(LATENCY_DELAY, LATENCY_TRANSITION))
}

/// Cache hit/miss bars; the hit share doubles as the ring's fill.
#[must_use]
pub fn cache(opts: &ChartOptions) -> BarRenderer {
    BarRenderer::new(opts.scenario.dataset(), ScaleMode::Partition)
        .with_timing(opts.timing(CACHE_DELAY, CACHE_TRANSITION))
}

/// Process memory-layout strip.
#[must_use]
pub fn process_layout(opts: &ChartOptions) -> BarRenderer {
    BarRenderer::new(datasets::process_layout(), ScaleMode::Partition)
        .with_floor(Floor::NonZero(SEGMENT_MIN_PERCENT))
        .with_label_threshold(SEGMENT_LABEL_MIN_PERCENT)
        .with_timing(opts.timing(LAYOUT_DELAY, LAYOUT_TRANSITION))
}

/// Every chart with its name, in page order.
#[must_use]
pub fn all(opts: &ChartOptions) -> Vec<(&'static str, BarRenderer)> {
    vec![
        ("hierarchy-speed", hierarchy_speed(opts)),
        ("hierarchy-capacity", hierarchy_capacity(opts)),
        ("latency", latency(opts)),
        ("cache", cache(opts)),
        ("process-layout", process_layout(opts)),
    ]
}
