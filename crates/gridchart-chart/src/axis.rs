//! Axis types

use gridchart_core::CellValue;

/// One `[index, label]` tick; indices are 1-based
pub type Tick = (usize, CellValue);

/// Chart axis
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    /// Tick marks in index order
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Create an axis without ticks
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label at the next 1-based index
    pub fn push_label<L: Into<CellValue>>(&mut self, label: L) {
        let index = self.ticks.len() + 1;
        self.ticks.push((index, label.into()));
    }
}

/// Tick marks for the shared axis of all series
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ticks {
    pub xaxis: Axis,
}

impl Ticks {
    /// Wrap an x axis
    pub fn new(xaxis: Axis) -> Self {
        Self { xaxis }
    }
}
