//! # memviz-core
//!
//! Model behind the memory-hierarchy visualizations: labeled datasets,
//! proportional scaling (linear, logarithmic, inverse, partition), the
//! single-record selection state machine, and cancellable one-shot
//! animation timers.
//!
//! Nothing here depends on a terminal. Every time-dependent operation takes
//! an explicit [`std::time::Instant`], so callers decide what "now" means.

pub mod charts;
pub mod constants;
pub mod datasets;
pub mod error;
pub mod record;
pub mod renderer;
pub mod report;
pub mod scale;
pub mod selection;
pub mod state;
pub mod timer;

// Re-exports
pub use charts::ChartOptions;
pub use constants::exit_codes;
pub use datasets::CacheScenario;
pub use error::VizError;
pub use record::{ColorTag, Dataset, Record};
pub use renderer::{BarRenderer, Tooltip};
pub use report::{ChartReport, RecordReport};
pub use scale::{Floor, ScaleBasis, ScaleMode};
pub use selection::{Selection, SelectionEvent};
pub use state::{AnimationTiming, RenderState};
pub use timer::{OneShotTimer, TimerState};
