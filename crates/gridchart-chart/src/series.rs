//! Data series types

use gridchart_core::CellValue;

/// One `[index, value]` point; indices are 1-based
pub type DataPoint = (usize, CellValue);

/// Labeled data series
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    /// Series label (may be empty)
    pub label: CellValue,
    /// Points in index order
    pub data: Vec<DataPoint>,
}

impl Series {
    /// Create an empty series with a label
    pub fn new<L: Into<CellValue>>(label: L) -> Self {
        Self {
            label: label.into(),
            data: Vec::new(),
        }
    }

    /// Append a value at the next 1-based index
    pub fn push<V: Into<CellValue>>(&mut self, value: V) {
        let index = self.data.len() + 1;
        self.data.push((index, value.into()));
    }

    /// Set the points
    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
