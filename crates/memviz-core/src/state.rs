//! Per-dataset animation and selection state.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::selection::{Selection, SelectionEvent};
use crate::timer::OneShotTimer;

/// Delay before the snap and length of the drawn transition after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Time between mount and the snap to true values.
    pub delay: Duration,
    /// Time the presentation layer spends easing to the new values.
    pub transition: Duration,
}

impl AnimationTiming {
    /// Create a timing.
    #[must_use]
    pub const fn new(delay: Duration, transition: Duration) -> Self {
        Self { delay, transition }
    }

    /// No delay, no transition.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

/// Mutable state of one visualization instance.
///
/// `animated[i]` is 0 after [`mount`](Self::mount) and snaps to the target
/// when the one-shot timer fires. The drawn value eases from what was on
/// screen at fire time to the new target and never overshoots.
#[derive(Debug, Clone)]
pub struct RenderState {
    targets: Vec<f64>,
    animated: Vec<f64>,
    from: Vec<f64>,
    fired_at: Option<Instant>,
    timing: AnimationTiming,
    timer: OneShotTimer,
    selection: Selection,
    mounted: bool,
}

impl RenderState {
    /// Create unmounted state for `targets` (the authored values).
    #[must_use]
    pub fn new(targets: Vec<f64>, timing: AnimationTiming) -> Self {
        let len = targets.len();
        Self {
            targets,
            animated: vec![0.0; len],
            from: vec![0.0; len],
            fired_at: None,
            timing,
            timer: OneShotTimer::new(),
            selection: Selection::Unselected,
            mounted: false,
        }
    }

    /// Reset every magnitude to zero and arm the one-shot timer.
    pub fn mount(&mut self, now: Instant) {
        self.animated.iter_mut().for_each(|v| *v = 0.0);
        self.from.iter_mut().for_each(|v| *v = 0.0);
        self.fired_at = None;
        self.selection = Selection::Unselected;
        self.mounted = true;
        self.timer.schedule(now, self.timing.delay);
        debug!(records = self.targets.len(), delay = ?self.timing.delay, "render state mounted");
    }

    /// Cancel the pending timer. Nothing changes after this until the next mount.
    pub fn unmount(&mut self) {
        let cancelled = self.timer.cancel();
        self.mounted = false;
        self.selection = Selection::Unselected;
        debug!(cancelled, "render state unmounted");
    }

    /// Advance to `now`. Returns `true` if the timer fired on this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted || !self.timer.poll(now) {
            return false;
        }
        self.from = (0..self.targets.len())
            .map(|i| self.visual_value(i, now))
            .collect();
        self.animated.clone_from(&self.targets);
        self.fired_at = Some(now);
        debug!(records = self.targets.len(), "animation timer fired");
        true
    }

    /// Point at new targets and schedule a fresh snap to them.
    ///
    /// The current magnitudes stay in place until the new timer fires. On an
    /// unmounted state only the targets change.
    pub fn retarget(&mut self, targets: Vec<f64>, now: Instant) {
        let len = targets.len();
        if len != self.targets.len() {
            self.animated.resize(len, 0.0);
            self.from.resize(len, 0.0);
            if self.selection.index().is_some_and(|i| i >= len) {
                self.selection = Selection::Unselected;
            }
        }
        // Freeze whatever is drawn right now as the new resting point.
        if self.mounted {
            for i in 0..len {
                let shown = self.visual_value(i, now);
                self.from[i] = shown;
                self.animated[i] = shown;
            }
            self.fired_at = None;
        }
        self.targets = targets;
        if self.mounted {
            self.timer.cancel();
            self.timer.schedule(now, self.timing.delay);
            debug!(records = len, "render state retargeted");
        }
    }

    /// Apply a selection event; out-of-range indices are ignored.
    pub fn select(&mut self, event: SelectionEvent) {
        self.selection = self.selection.apply_bounded(event, self.targets.len());
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Snapped magnitude of record `i` (0 before the timer fires).
    #[must_use]
    pub fn animated_value(&self, i: usize) -> f64 {
        self.animated.get(i).copied().unwrap_or(0.0)
    }

    /// All snapped magnitudes.
    #[must_use]
    pub fn animated_values(&self) -> &[f64] {
        &self.animated
    }

    /// Authored targets.
    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Eased transition progress in `[0, 1]`; 1 when no transition is running.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(fired_at) = self.fired_at else {
            return 1.0;
        };
        let transition = self.timing.transition.as_secs_f64();
        if transition <= 0.0 {
            return 1.0;
        }
        let t = (now.saturating_duration_since(fired_at).as_secs_f64() / transition).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    /// Magnitude the presentation layer should draw for record `i` at `now`.
    #[must_use]
    pub fn visual_value(&self, i: usize, now: Instant) -> f64 {
        let from = self.from.get(i).copied().unwrap_or(0.0);
        let to = self.animated_value(i);
        from + (to - from) * self.progress(now)
    }

    /// Drawn magnitudes for every record.
    #[must_use]
    pub fn visual_values(&self, now: Instant) -> Vec<f64> {
        (0..self.targets.len())
            .map(|i| self.visual_value(i, now))
            .collect()
    }

    /// Whether the timer has fired and the transition has finished.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.fired_at.is_some() && self.progress(now) >= 1.0
    }

    /// Whether the state is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the snap is still waiting on its timer.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Animation timing.
    #[must_use]
    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
