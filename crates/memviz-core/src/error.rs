//! Error type shared by the memviz crates.

/// Errors raised while configuring or presenting visualizations.
///
/// Rendering itself never fails: degenerate datasets degrade to zero-width
/// bars. Errors only come from user-supplied configuration and I/O.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// A duration string could not be parsed.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    /// Unknown panel name.
    #[error("unknown panel: {0:?} (expected hierarchy, latency, cache or layout)")]
    UnknownPanel(String),

    /// Unknown scale name.
    #[error("unknown scale: {0:?} (expected linear or log)")]
    UnknownScale(String),

    /// Unknown cache scenario name.
    #[error("unknown cache scenario: {0:?} (expected sequential, random or strided)")]
    UnknownScenario(String),

    /// Terminal or file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Interrupted by the user.
    #[error("interrupted")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = VizError::UnknownPanel("graphs".into());
        assert!(err.to_string().contains("\"graphs\""));

        let err = VizError::InvalidDuration("5x".into());
        assert_eq!(err.to_string(), "invalid duration: \"5x\"");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: VizError = io.into();
        assert!(matches!(err, VizError::Io(_)));
    }
}
