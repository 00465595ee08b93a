//! Application entry point and dispatch.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use memviz_core::charts::{self, ChartOptions};
use memviz_core::error::VizError;
use memviz_core::report::ChartReport;
use memviz_tui::{TuiApp, TuiMessage};
use tracing::info;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        generate_completion(shell, &mut io::stdout());
        return Ok(());
    }

    if config.dump {
        return run_dump(config);
    }

    run_tui(config)
}

/// Write a completion script for `shell` to `out`.
pub fn generate_completion(shell: Shell, out: &mut dyn Write) {
    let mut cmd = AppConfig::command();
    generate(shell, &mut cmd, "memviz", out);
}

/// Settle every chart at `now` and collect the results.
pub fn reports(opts: &ChartOptions, now: Instant) -> Vec<ChartReport> {
    charts::all(opts)
        .into_iter()
        .map(|(name, mut chart)| ChartReport::settled(name, &mut chart, now))
        .collect()
}

/// Plain-text table of `reports`.
pub fn format_reports(reports: &[ChartReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{} ({} scale)", report.chart, report.scale);
        for r in &report.records {
            let _ = writeln!(
                out,
                "  {:<20} {:>28} {:>7.2}% {:>7.2}%{}",
                r.label,
                r.value_text,
                r.percent,
                r.extent,
                if r.label_visible { "" } else { "  (no label)" }
            );
        }
        out.push('\n');
    }
    out
}

fn run_dump(config: &AppConfig) -> Result<()> {
    // Validate every flag, not only the ones the dump uses
    let opts = config.tui_options()?.charts;
    let reports = reports(&opts, Instant::now());
    info!(charts = reports.len(), json = config.json, "dumping settled charts");

    let mut stdout = io::stdout().lock();
    if config.json {
        serde_json::to_writer_pretty(&mut stdout, &reports).context("writing JSON dump")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(format_reports(&reports).as_bytes())?;
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let opts = config.tui_options()?;

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let interrupted = Arc::new(AtomicBool::new(false));
    ctrlc_handler(tx, Arc::clone(&interrupted))?;

    let mut app = TuiApp::new(rx, opts);
    info!(panel = %opts.initial, "opening dashboard");
    app.run().map_err(VizError::from).context("TUI error")?;

    if interrupted.load(Ordering::SeqCst) {
        return Err(VizError::Cancelled.into());
    }
    Ok(())
}

/// Quit the dashboard on SIGINT. In raw mode Ctrl+C arrives as a key instead.
fn ctrlc_handler(tx: crossbeam_channel::Sender<TuiMessage>, interrupted: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
        let _ = tx.send(TuiMessage::Quit);
    })
    .context("setting Ctrl+C handler")
}
