//! Timing, floor and threshold constants for the visualizations.

use std::time::Duration;

/// Mount delay before the hierarchy bars grow.
pub const HIERARCHY_DELAY: Duration = Duration::from_millis(300);

/// Transition length of the hierarchy bars.
pub const HIERARCHY_TRANSITION: Duration = Duration::from_millis(500);

/// Mount delay before the latency bars grow.
pub const LATENCY_DELAY: Duration = Duration::from_millis(500);

/// Transition length of the latency bars.
pub const LATENCY_TRANSITION: Duration = Duration::from_millis(1000);

/// Delay between picking a cache scenario and the bars moving.
pub const CACHE_DELAY: Duration = Duration::from_millis(300);

/// Transition length of the cache hit/miss bars and ring.
pub const CACHE_TRANSITION: Duration = Duration::from_millis(1000);

/// Mount delay before the memory-layout strip fills.
pub const LAYOUT_DELAY: Duration = Duration::from_millis(500);

/// Transition length of the memory-layout strip.
pub const LAYOUT_TRANSITION: Duration = Duration::from_millis(700);

/// Minimum rendered height of a latency bar, in percent.
pub const LATENCY_MIN_PERCENT: f64 = 2.0;

/// Minimum rendered width of a capacity bar, in percent.
pub const CAPACITY_MIN_PERCENT: f64 = 0.5;

/// Segments narrower than this (in percent) do not carry an inline label.
pub const SEGMENT_LABEL_MIN_PERCENT: f64 = 5.0;

/// Default event-loop poll interval.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Longest delay, transition or tick accepted from the command line.
pub const MAX_DURATION: Duration = Duration::from_secs(3600);

/// Exit codes for the `memviz` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
