//! Settled snapshots of charts, for non-interactive output.

use std::time::Instant;

use serde::Serialize;

use crate::renderer::BarRenderer;
use crate::scale::ScaleMode;

/// One record of a settled chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub label: String,
    /// Authored value.
    pub value: f64,
    pub unit: String,
    /// Value and unit as a tooltip shows them.
    pub value_text: String,
    /// Display percentage after the animation settled.
    pub percent: f64,
    /// Rendered extent, floor included.
    pub extent: f64,
    /// Whether an inline label would be drawn.
    pub label_visible: bool,
}

/// A chart after its animation settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub chart: String,
    pub scale: ScaleMode,
    pub records: Vec<RecordReport>,
}

impl ChartReport {
    /// Mount `renderer` at `now`, let its timer fire and its transition finish,
    /// and capture the result. The renderer is unmounted afterwards.
    pub fn settled(name: &str, renderer: &mut BarRenderer, now: Instant) -> Self {
        let timing = renderer.state().timing();
        renderer.mount(now);
        let fired = now.checked_add(timing.delay).unwrap_or(now);
        renderer.tick(fired);
        let done = fired.checked_add(timing.transition).unwrap_or(fired);

        let records = renderer
            .dataset()
            .iter()
            .enumerate()
            .map(|(i, record)| RecordReport {
                label: record.label.clone(),
                value: record.value,
                unit: record.unit.clone(),
                value_text: record.value_text(),
                percent: renderer.display_percent(i),
                extent: renderer.extent_percent(i, done),
                label_visible: renderer.label_visible(i),
            })
            .collect();
        renderer.unmount();

        Self {
            chart: name.to_string(),
            scale: renderer.scale(),
            records,
        }
    }
}
