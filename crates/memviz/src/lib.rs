//! memviz library: configuration, dispatch and output of the memviz binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
