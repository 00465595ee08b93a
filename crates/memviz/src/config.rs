//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use memviz_core::charts::ChartOptions;
use memviz_core::constants::MAX_DURATION;
use memviz_core::datasets::CacheScenario;
use memviz_core::error::VizError;
use memviz_core::scale::ScaleMode;
use memviz_tui::{PanelKind, TuiOptions};

/// memviz: animated memory hierarchy, latency, cache and layout charts.
#[derive(Parser, Debug)]
#[command(name = "memviz", version, about)]
pub struct AppConfig {
    /// Panel shown first: hierarchy, latency, cache or layout.
    #[arg(long, default_value = "hierarchy", env = "MEMVIZ_PANEL")]
    pub panel: String,

    /// Latency graph scale: linear or log.
    #[arg(long, default_value = "log", env = "MEMVIZ_SCALE")]
    pub scale: String,

    /// Initial cache scenario: sequential, random or strided.
    #[arg(long, default_value = "sequential")]
    pub scenario: String,

    /// Override every chart's delay before values snap (e.g. "500ms", "1s", "0").
    #[arg(long)]
    pub delay: Option<String>,

    /// Override every chart's transition length (e.g. "700ms").
    #[arg(long)]
    pub transition: Option<String>,

    /// Event-loop poll interval.
    #[arg(long, default_value = "50ms")]
    pub tick: String,

    /// Print settled chart values instead of opening the dashboard.
    #[arg(long)]
    pub dump: bool,

    /// Print the dump as JSON.
    #[arg(long, requires = "dump")]
    pub json: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Latency scale; only linear and log are accepted here.
    pub fn latency_scale(&self) -> Result<ScaleMode, VizError> {
        match self.scale.parse::<ScaleMode>()? {
            scale @ (ScaleMode::Linear | ScaleMode::Logarithmic) => Ok(scale),
            _ => Err(VizError::UnknownScale(self.scale.clone())),
        }
    }

    /// Chart options from the flags.
    pub fn chart_options(&self) -> Result<ChartOptions, VizError> {
        Ok(ChartOptions {
            delay: self.delay.as_deref().map(parse_duration).transpose()?,
            transition: self.transition.as_deref().map(parse_duration).transpose()?,
            latency_scale: self.latency_scale()?,
            scenario: self.scenario.parse::<CacheScenario>()?,
        })
    }

    /// Dashboard options from the flags.
    pub fn tui_options(&self) -> Result<TuiOptions, VizError> {
        Ok(TuiOptions {
            initial: self.panel.parse::<PanelKind>()?,
            charts: self.chart_options()?,
            tick_rate: parse_tick(&self.tick)?,
        })
    }
}

/// Parse a duration of at most [`MAX_DURATION`]: "5m", "1h", "30s", "500ms" or a bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration, VizError> {
    let duration = parse_duration_unbounded(s)?;
    if duration > MAX_DURATION {
        return Err(VizError::InvalidDuration(s.to_string()));
    }
    Ok(duration)
}

/// Poll interval; zero would spin the event loop.
fn parse_tick(s: &str) -> Result<Duration, VizError> {
    match parse_duration(s)? {
        Duration::ZERO => Err(VizError::InvalidDuration(s.to_string())),
        tick => Ok(tick),
    }
}

fn parse_duration_unbounded(s: &str) -> Result<Duration, VizError> {
    let invalid = || VizError::InvalidDuration(s.to_string());
    let t = s.trim();
    let number = |digits: &str| digits.trim().parse::<u64>().map_err(|_| invalid());

    if let Some(ms) = t.strip_suffix("ms") {
        Ok(Duration::from_millis(number(ms)?))
    } else if let Some(mins) = t.strip_suffix('m') {
        number(mins)?
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(invalid)
    } else if let Some(hours) = t.strip_suffix('h') {
        number(hours)?
            .checked_mul(3600)
            .map(Duration::from_secs)
            .ok_or_else(invalid)
    } else if let Some(secs) = t.strip_suffix('s') {
        Ok(Duration::from_secs(number(secs)?))
    } else {
        Ok(Duration::from_secs(number(t)?))
    }
}
