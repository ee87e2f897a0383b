//! Dispersion measures used to compare rows against columns

use std::fmt;
use std::str::FromStr;

use gridchart_core::{Error, Result};

/// How spread out a numeric sequence is
///
/// Every measure returns a non-negative value and 0 for sequences with fewer
/// than two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DispersionMeasure {
    /// Mean absolute deviation from the median, relative to the median's
    /// magnitude (unscaled when the median is 0).
    #[default]
    MedianAbsoluteVariation,
    /// Median of the absolute deviations from the median
    MedianAbsoluteDeviation,
    /// Population standard deviation
    StandardDeviation,
}

impl DispersionMeasure {
    /// Short name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            DispersionMeasure::MedianAbsoluteVariation => "mav",
            DispersionMeasure::MedianAbsoluteDeviation => "mad",
            DispersionMeasure::StandardDeviation => "stddev",
        }
    }

    /// Measure the dispersion of `values`
    pub fn measure(&self, values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        match self {
            DispersionMeasure::MedianAbsoluteVariation => {
                let m = median(values);
                let mean_dev =
                    values.iter().map(|v| (v - m).abs()).sum::<f64>() / values.len() as f64;
                if m == 0.0 {
                    mean_dev
                } else {
                    mean_dev / m.abs()
                }
            }
            DispersionMeasure::MedianAbsoluteDeviation => {
                let m = median(values);
                let deviations: Vec<f64> = values.iter().map(|v| (v - m).abs()).collect();
                median(&deviations)
            }
            DispersionMeasure::StandardDeviation => {
                let n = values.len() as f64;
                let mean = values.iter().sum::<f64>() / n;
                let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
                var.sqrt()
            }
        }
    }
}

impl fmt::Display for DispersionMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispersionMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mav" | "median-absolute-variation" => Ok(DispersionMeasure::MedianAbsoluteVariation),
            "mad" | "median-absolute-deviation" => Ok(DispersionMeasure::MedianAbsoluteDeviation),
            "stddev" | "standard-deviation" => Ok(DispersionMeasure::StandardDeviation),
            _ => Err(Error::invalid_argument(format!(
                "unknown dispersion measure '{s}' (expected mav, mad, stddev)"
            ))),
        }
    }
}

/// Median of a non-empty sequence; the mean of the two middle values for
/// even counts.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let len = sorted.len();
    if len % 2 == 1 {
        sorted[len / 2]
    } else {
        (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    }
}
