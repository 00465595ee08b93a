//! Property-based tests for scaling, selection and animation.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use memviz_core::record::{ColorTag, Dataset, Record};
use memviz_core::renderer::BarRenderer;
use memviz_core::scale::{Floor, ScaleMode};
use memviz_core::selection::{Selection, SelectionEvent};
use memviz_core::state::AnimationTiming;

fn dataset(values: &[f64]) -> Dataset {
    Dataset::new(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Record::new(format!("r{i}"), v, "u", "", ColorTag::Blue))
            .collect(),
    )
}

fn any_scale() -> impl Strategy<Value = ScaleMode> {
    prop_oneof![
        Just(ScaleMode::Linear),
        Just(ScaleMode::Logarithmic),
        Just(ScaleMode::Inverse),
        Just(ScaleMode::Partition),
    ]
}

fn any_event(len: usize) -> impl Strategy<Value = SelectionEvent> {
    let bound = len + 2;
    prop_oneof![
        (0..bound).prop_map(SelectionEvent::HoverEnter),
        Just(SelectionEvent::HoverLeave),
        (0..bound).prop_map(SelectionEvent::Click),
    ]
}

const DELAY: Duration = Duration::from_millis(400);
const TRANSITION: Duration = Duration::from_millis(800);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Display percentages and extents stay in [0, 100] at every point of the animation.
    #[test]
    fn percentages_stay_in_range(
        values in prop::collection::vec(0.0f64..1e9, 0..12),
        scale in any_scale(),
        step in 0u32..=10,
    ) {
        let mut r = BarRenderer::new(dataset(&values), scale)
            .with_floor(Floor::Always(2.0))
            .with_timing(AnimationTiming::new(DELAY, TRANSITION));
        let t0 = Instant::now();
        r.mount(t0);
        r.tick(t0 + DELAY);
        let now = t0 + DELAY + TRANSITION * step / 10;
        for i in 0..values.len() {
            let p = r.display_percent(i);
            let e = r.extent_percent(i, now);
            prop_assert!((0.0..=100.0).contains(&p), "percent {} out of range", p);
            prop_assert!((0.0..=100.0).contains(&e), "extent {} out of range", e);
        }
    }

    /// Linear mode: the maximum is 100, everything else its ratio to the maximum.
    #[test]
    fn linear_is_ratio_of_max(values in prop::collection::vec(0.0f64..1e6, 1..12)) {
        let mut r = BarRenderer::new(dataset(&values), ScaleMode::Linear);
        r.mount(Instant::now());
        r.tick(Instant::now());
        let max = values.iter().copied().fold(0.0, f64::max);
        for (i, v) in values.iter().enumerate() {
            let expected = if max > 0.0 { 100.0 * v / max } else { 0.0 };
            prop_assert!((r.display_percent(i) - expected).abs() < 1e-9);
        }
    }

    /// Partition mode: percentages sum to 100 whenever the sum is positive.
    #[test]
    fn partition_sums_to_hundred(values in prop::collection::vec(0.0f64..1e6, 1..12)) {
        let mut r = BarRenderer::new(dataset(&values), ScaleMode::Partition);
        r.mount(Instant::now());
        r.tick(Instant::now());
        let total: f64 = r.display_percentages().iter().sum();
        if values.iter().sum::<f64>() > 0.0 {
            prop_assert!((total - 100.0).abs() < 1e-6, "total {}", total);
        } else {
            prop_assert!(total == 0.0);
        }
    }

    /// The drawn value never leaves [0, value] during the transition.
    #[test]
    fn no_overshoot(values in prop::collection::vec(0.0f64..1e6, 1..8), step in 0u32..=20) {
        let mut r = BarRenderer::new(dataset(&values), ScaleMode::Linear)
            .with_timing(AnimationTiming::new(DELAY, TRANSITION));
        let t0 = Instant::now();
        r.mount(t0);
        let now = t0 + (DELAY + TRANSITION) * step / 20;
        r.tick(now);
        for (i, v) in values.iter().enumerate() {
            let shown = r.state().visual_value(i, now);
            prop_assert!(shown >= 0.0 && shown <= *v + 1e-9, "{} not in [0, {}]", shown, v);
        }
    }

    /// Whatever the input sequence, at most one in-range record is selected.
    #[test]
    fn selection_stays_in_range(
        len in 0usize..6,
        events in prop::collection::vec(any_event(6), 0..30),
    ) {
        let values = vec![1.0; len];
        let mut r = BarRenderer::new(dataset(&values), ScaleMode::Linear);
        for event in events {
            r.select(event);
            if let Selection::Selected(i) = r.selection() {
                prop_assert!(i < len);
            }
        }
    }
}
