//! Conversion output

use crate::axis::Ticks;
use crate::series::Series;

/// Series plus shared-axis ticks, ready for a chart renderer
///
/// Serializes (with the `serde` feature) as
/// `{"data": [{"label": .., "data": [[1, v], ..]}], "ticks": {"xaxis": {"ticks": [[1, l], ..]}}}`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionResult {
    /// Data series
    pub data: Vec<Series>,
    /// Shared axis ticks
    pub ticks: Ticks,
}

impl ConversionResult {
    /// Create a result
    pub fn new(data: Vec<Series>, ticks: Ticks) -> Self {
        Self { data, ticks }
    }

    /// Check if there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.ticks.xaxis.ticks.is_empty()
    }
}
