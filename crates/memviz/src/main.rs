//! memviz: animated memory-hierarchy visualizations for the terminal.

use std::process::ExitCode;

use memviz_core::constants::exit_codes;
use memviz_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    // Parse CLI args
    let config = config::AppConfig::parse();

    // Initialize tracing
    if let Err(err) = logging::init(config.log_file.as_deref()) {
        eprintln!("Error: {err}");
        return exit(errors::handle_error(&err));
    }

    match app::run(&config) {
        Ok(()) => exit(exit_codes::SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, "memviz failed");
            eprintln!("Error: {err:#}");
            exit(errors::exit_code(&err))
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
