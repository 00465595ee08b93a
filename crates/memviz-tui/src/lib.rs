//! # memviz-tui
//!
//! Interactive memory-hierarchy dashboard using ratatui with Elm architecture.

pub mod footer;
pub mod geometry;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod panels;
pub mod pointer;
pub mod styles;
pub mod tooltip;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{TuiApp, TuiOptions};
pub use panels::{Panel, PanelKind};
pub use pointer::PointerAction;
