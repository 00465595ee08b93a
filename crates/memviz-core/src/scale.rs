//! Scale modes and presentation floors.
//!
//! A scale turns a record's current animated magnitude into a percentage of
//! the available extent. Every result is clamped to `[0, 100]` and every
//! division is guarded, so degenerate datasets (empty, all-zero, max of 1 on a
//! log scale) produce 0 rather than NaN or infinity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::VizError;

/// Dataset statistics a scale divides by.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleBasis {
    /// Largest authored value.
    pub max: f64,
    /// Sum of authored values.
    pub sum: f64,
}

impl ScaleBasis {
    /// Compute the basis for a slice of authored values.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        Self {
            max: values.iter().copied().fold(0.0, f64::max),
            sum: values.iter().sum(),
        }
    }
}

/// How authored values map to display percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// `100 * animated / max`.
    #[default]
    Linear,
    /// `100 * log10(animated) / log10(max)`; values below 1 count as 0.
    Logarithmic,
    /// `100 * (1 - value / max)`, grown in proportion to animation progress.
    Inverse,
    /// `100 * animated / sum`; the records tile the whole extent.
    Partition,
}

impl ScaleMode {
    /// Display percentage of one record.
    ///
    /// `animated` is the record's current animated magnitude, `value` its
    /// authored value, and `basis` the statistics of the whole dataset.
    #[must_use]
    pub fn percent(self, animated: f64, value: f64, basis: ScaleBasis) -> f64 {
        let raw = match self {
            Self::Linear => ratio_percent(animated, basis.max),
            Self::Logarithmic => ratio_percent(log10_or_zero(animated), log10_or_zero(basis.max)),
            Self::Inverse => {
                let share = 100.0 - ratio_percent(value, basis.max);
                share * ratio_percent(animated, value) / 100.0
            }
            Self::Partition => ratio_percent(animated, basis.sum),
        };
        sanitize(raw)
    }

    /// Display percentages for a whole dataset.
    ///
    /// `animated` and `values` are index-aligned; missing animated entries
    /// count as zero.
    #[must_use]
    pub fn percentages(self, animated: &[f64], values: &[f64]) -> Vec<f64> {
        let basis = ScaleBasis::of(values);
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| self.percent(animated.get(i).copied().unwrap_or(0.0), value, basis))
            .collect()
    }

    /// Toggle between linear and logarithmic; other modes are unchanged.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Logarithmic,
            Self::Logarithmic => Self::Linear,
            other => other,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Logarithmic => "Logarithmic",
            Self::Inverse => "Inverse",
            Self::Partition => "Partition",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleMode {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Logarithmic),
            "inverse" => Ok(Self::Inverse),
            "partition" => Ok(Self::Partition),
            _ => Err(VizError::UnknownScale(s.to_string())),
        }
    }
}

/// Minimum rendered extent. Applies to drawing only, never to reported numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "percent")]
pub enum Floor {
    /// No minimum.
    #[default]
    None,
    /// Always at least this many percent, even before the bar grows.
    Always(f64),
    /// At least this many percent once the animated value is non-zero.
    NonZero(f64),
}

impl Floor {
    /// Rendered extent for a display percentage.
    #[must_use]
    pub fn apply(self, percent: f64, animated: f64) -> f64 {
        let percent = sanitize(percent);
        match self {
            Self::None => percent,
            Self::Always(min) => percent.max(min).min(100.0),
            Self::NonZero(min) if animated > 0.0 => percent.max(min).min(100.0),
            Self::NonZero(_) => percent,
        }
    }
}

fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() && numerator.is_finite() {
        100.0 * numerator / denominator
    } else {
        0.0
    }
}

fn log10_or_zero(value: f64) -> f64 {
    if value >= 1.0 {
        value.log10()
    } else {
        0.0
    }
}

fn sanitize(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATENCY: [f64; 6] = [1.0, 4.0, 12.0, 38.0, 200.0, 50000.0];
    const LAYOUT: [f64; 6] = [8.0, 45.0, 25.0, 8.0, 7.0, 7.0];

    #[test]
    fn linear_max_is_full() {
        let pct = ScaleMode::Linear.percentages(&LATENCY, &LATENCY);
        assert!((pct[5] - 100.0).abs() < f64::EPSILON);
        assert!((pct[4] - 100.0 * 200.0 / 50000.0).abs() < 1e-12);
    }

    #[test]
    fn log_endpoints() {
        let pct = ScaleMode::Logarithmic.percentages(&LATENCY, &LATENCY);
        assert!((pct[5] - 100.0).abs() < 1e-9);
        assert!(pct[0].abs() < f64::EPSILON);
        assert!(pct.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn log_of_sub_one_is_zero() {
        let basis = ScaleBasis::of(&LATENCY);
        assert!(ScaleMode::Logarithmic.percent(0.0, 4.0, basis).abs() < f64::EPSILON);
        assert!(ScaleMode::Logarithmic.percent(0.5, 4.0, basis).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_of_hundred_is_identity() {
        let pct = ScaleMode::Partition.percentages(&LAYOUT, &LAYOUT);
        for (p, v) in pct.iter().zip(LAYOUT) {
            assert!((p - v).abs() < 1e-9, "{p} != {v}");
        }
        let total: f64 = pct.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_settles_to_speed_share() {
        let access = [1.0, 2.0, 7.0, 15.0, 200.0, 10000.0];
        let pct = ScaleMode::Inverse.percentages(&access, &access);
        assert!((pct[0] - 99.99).abs() < 1e-9);
        assert!(pct[5].abs() < f64::EPSILON);

        let zero = ScaleMode::Inverse.percentages(&[0.0; 6], &access);
        assert!(zero.iter().all(|p| *p == 0.0));
    }

    #[test]
    fn degenerate_datasets_are_zero() {
        for mode in [
            ScaleMode::Linear,
            ScaleMode::Logarithmic,
            ScaleMode::Inverse,
            ScaleMode::Partition,
        ] {
            let pct = mode.percentages(&[0.0, 0.0], &[0.0, 0.0]);
            assert!(pct.iter().all(|p| *p == 0.0), "{mode}");
            assert!(mode.percentages(&[], &[]).is_empty());
        }
        // log10(1) == 0 as the denominator
        let pct = ScaleMode::Logarithmic.percentages(&[1.0, 1.0], &[1.0, 1.0]);
        assert!(pct.iter().all(|p| *p == 0.0));
    }

    #[test]
    fn missing_animated_entries_count_as_zero() {
        let pct = ScaleMode::Linear.percentages(&[2.0], &[2.0, 4.0]);
        assert!((pct[0] - 50.0).abs() < f64::EPSILON);
        assert!(pct[1].abs() < f64::EPSILON);
    }

    #[test]
    fn floor_only_touches_extent() {
        assert!((Floor::Always(2.0).apply(0.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((Floor::Always(2.0).apply(40.0, 1.0) - 40.0).abs() < f64::EPSILON);
        assert!(Floor::NonZero(3.0).apply(0.0, 0.0).abs() < f64::EPSILON);
        assert!((Floor::NonZero(3.0).apply(1.0, 0.5) - 3.0).abs() < f64::EPSILON);
        assert!((Floor::None.apply(0.25, 1.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_sanitizes_input() {
        assert!(Floor::None.apply(f64::NAN, 0.0).abs() < f64::EPSILON);
        assert!((Floor::Always(2.0).apply(150.0, 1.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn toggle_and_parse() {
        assert_eq!(ScaleMode::Linear.toggled(), ScaleMode::Logarithmic);
        assert_eq!(ScaleMode::Logarithmic.toggled(), ScaleMode::Linear);
        assert_eq!(ScaleMode::Partition.toggled(), ScaleMode::Partition);
        assert_eq!("log".parse::<ScaleMode>().unwrap(), ScaleMode::Logarithmic);
        assert_eq!("Linear".parse::<ScaleMode>().unwrap(), ScaleMode::Linear);
        assert!("cubic".parse::<ScaleMode>().is_err());
    }
}
