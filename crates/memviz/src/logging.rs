//! Tracing subscriber setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use memviz_core::error::VizError;
use tracing_subscriber::EnvFilter;

fn filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

/// Install the global subscriber, writing to `log_file` when given and to stderr otherwise.
///
/// The dashboard owns the terminal, so file output is the only way to see
/// its logs while it runs.
pub fn init(log_file: Option<&Path>) -> Result<(), VizError> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
