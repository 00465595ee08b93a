//! Error handling and exit codes.

use memviz_core::constants::exit_codes;
use memviz_core::error::VizError;

/// Exit code for a configuration or runtime error.
pub fn handle_error(err: &VizError) -> i32 {
    match err {
        VizError::InvalidDuration(_)
        | VizError::UnknownPanel(_)
        | VizError::UnknownScale(_)
        | VizError::UnknownScenario(_) => exit_codes::ERROR_CONFIG,
        VizError::Io(_) => exit_codes::ERROR_GENERIC,
        VizError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<VizError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&VizError::Cancelled), 130);
        assert_eq!(handle_error(&VizError::UnknownPanel("x".into())), 4);
        assert_eq!(handle_error(&VizError::InvalidDuration("x".into())), 4);
        let io = std::io::Error::other("tty gone");
        assert_eq!(handle_error(&VizError::Io(io)), 1);
    }

    #[test]
    fn foreign_errors_are_generic() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
        assert_eq!(exit_code(&VizError::UnknownScale("x".into()).into()), 4);
    }
}
