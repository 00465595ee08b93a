//! Proportional bar renderer: a dataset bound to a scale, a floor and its state.
//!
//! Two families of numbers come out of a renderer and they never mix:
//!
//! - *display percentages* come from the snapped animated values through the
//!   scale, and are what labels and reports show;
//! - *extents* come from the eased visual values, then the floor; they only
//!   size what is drawn.
//!
//! Tooltips carry the authored value and nothing else.

use std::time::Instant;

use serde::Serialize;

use crate::record::{Dataset, Record};
use crate::scale::{Floor, ScaleBasis, ScaleMode};
use crate::selection::{Selection, SelectionEvent};
use crate::state::{AnimationTiming, RenderState};

/// Detail text for a selected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Record label.
    pub title: String,
    /// Authored value with unit.
    pub value: String,
    /// Record description.
    pub description: String,
}

impl Tooltip {
    fn for_record(record: &Record) -> Self {
        Self {
            title: record.label.clone(),
            value: record.value_text(),
            description: record.description.clone(),
        }
    }
}

/// One visualization instance.
#[derive(Debug, Clone)]
pub struct BarRenderer {
    dataset: Dataset,
    scale: ScaleMode,
    floor: Floor,
    label_min_percent: Option<f64>,
    state: RenderState,
}

impl BarRenderer {
    /// Bind `dataset` to `scale` with immediate timing and no floor.
    #[must_use]
    pub fn new(dataset: Dataset, scale: ScaleMode) -> Self {
        let state = RenderState::new(dataset.values(), AnimationTiming::immediate());
        Self {
            dataset,
            scale,
            floor: Floor::None,
            label_min_percent: None,
            state,
        }
    }

    /// Set the presentation floor.
    #[must_use]
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floor = floor;
        self
    }

    /// Set the animation timing.
    #[must_use]
    pub fn with_timing(mut self, timing: AnimationTiming) -> Self {
        self.state = RenderState::new(self.dataset.values(), timing);
        self
    }

    /// Suppress inline labels on records below `percent`.
    #[must_use]
    pub fn with_label_threshold(mut self, percent: f64) -> Self {
        self.label_min_percent = Some(percent);
        self
    }

    /// Bound dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Whether the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> ScaleMode {
        self.scale
    }

    /// Switch scale. Values and selection are untouched.
    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.scale = scale;
    }

    /// Presentation floor.
    #[must_use]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Animation and selection state.
    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// See [`RenderState::mount`].
    pub fn mount(&mut self, now: Instant) {
        self.state.mount(now);
    }

    /// See [`RenderState::unmount`].
    pub fn unmount(&mut self) {
        self.state.unmount();
    }

    /// See [`RenderState::tick`].
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.tick(now)
    }

    /// Rebind to a new dataset and schedule a transition to its values.
    pub fn retarget(&mut self, dataset: Dataset, now: Instant) {
        self.state.retarget(dataset.values(), now);
        self.dataset = dataset;
    }

    /// Apply a selection event.
    pub fn select(&mut self, event: SelectionEvent) {
        self.state.select(event);
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// Selected record, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.selection().index().and_then(|i| self.dataset.get(i))
    }

    fn basis(&self) -> ScaleBasis {
        ScaleBasis {
            max: self.dataset.max(),
            sum: self.dataset.sum(),
        }
    }

    /// Display percentage of record `i` from its snapped animated value.
    #[must_use]
    pub fn display_percent(&self, i: usize) -> f64 {
        let Some(record) = self.dataset.get(i) else {
            return 0.0;
        };
        self.scale
            .percent(self.state.animated_value(i), record.value, self.basis())
    }

    /// Display percentages of every record.
    #[must_use]
    pub fn display_percentages(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.display_percent(i)).collect()
    }

    /// Percentage of record `i` for the eased value drawn at `now`, before the floor.
    #[must_use]
    pub fn visual_percent(&self, i: usize, now: Instant) -> f64 {
        let Some(record) = self.dataset.get(i) else {
            return 0.0;
        };
        self.scale
            .percent(self.state.visual_value(i, now), record.value, self.basis())
    }

    /// Rendered extent of record `i` at `now`, floor applied.
    #[must_use]
    pub fn extent_percent(&self, i: usize, now: Instant) -> f64 {
        self.floor
            .apply(self.visual_percent(i, now), self.state.visual_value(i, now))
    }

    /// Rendered extents of every record at `now`.
    #[must_use]
    pub fn extents(&self, now: Instant) -> Vec<f64> {
        (0..self.len()).map(|i| self.extent_percent(i, now)).collect()
    }

    /// Whether record `i` is wide enough to carry an inline label.
    #[must_use]
    pub fn label_visible(&self, i: usize) -> bool {
        if i >= self.len() {
            return false;
        }
        match self.label_min_percent {
            Some(min) => self.display_percent(i) >= min,
            None => true,
        }
    }

    /// Tooltip for record `i`.
    #[must_use]
    pub fn tooltip(&self, i: usize) -> Option<Tooltip> {
        self.dataset.get(i).map(Tooltip::for_record)
    }

    /// Tooltip for the selected record, if any.
    #[must_use]
    pub fn selected_tooltip(&self) -> Option<Tooltip> {
        self.selected_record().map(Tooltip::for_record)
    }
}
