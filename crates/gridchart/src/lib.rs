//! # gridchart
//!
//! Converts a raw grid of table cells into the series/ticks format expected
//! by chart renderers, without any schema hints.
//!
//! Gridchart works out on its own:
//!
//! - which leading rows and columns are labels and which are numeric data
//! - whether each series runs along a row or down a column
//! - how to label the shared x axis
//!
//! ## Example
//!
//! ```rust
//! use gridchart::prelude::*;
//!
//! let grid = CsvReader::read_str(
//!     "Title,Jan,Feb,Mar\nSales,10,20,15\nCosts,5,8,7\n",
//!     &CsvReadOptions::default(),
//! )
//! .unwrap();
//!
//! let result = grid.to_chart();
//! assert_eq!(result.data[0].label, CellValue::from("Sales"));
//! assert_eq!(result.data[0].data[0], (1, CellValue::Number(10.0)));
//! ```

pub mod convert;
pub mod prelude;

// Re-export conversion types
pub use convert::{convert, convert_with_options, detect, ConvertOptions, Detection};

// Re-export core types
pub use gridchart_core::{transpose, CellValue, Error, Grid, Result, SharedString};

// Re-export detection types
pub use gridchart_detect::{
    classify, compare, detect_direction, extract_series, extract_ticks, find_edge, locate, Bit,
    BitVector, Direction, DispersionMeasure, LogicalOp, LogicalResult, Position,
};

// Re-export chart types
pub use gridchart_chart::{Axis, ConversionResult, DataPoint, Series, Tick, Ticks};

// Re-export I/O types
pub use gridchart_csv::{CsvError, CsvReadOptions, CsvReader};

use std::path::Path;

/// Extension trait for Grid to add file input and conversion
pub trait GridExt {
    /// Read a grid from a CSV file
    fn open_csv<P: AsRef<Path>>(path: P) -> Result<Grid>;

    /// Convert the grid with default options
    fn to_chart(&self) -> ConversionResult;

    /// Convert the grid with explicit options
    fn to_chart_with_options(&self, options: &ConvertOptions) -> ConversionResult;
}

impl GridExt for Grid {
    fn open_csv<P: AsRef<Path>>(path: P) -> Result<Grid> {
        let path = path.as_ref();
        CsvReader::read_file(path, &CsvReadOptions::default())
            .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))
    }

    fn to_chart(&self) -> ConversionResult {
        convert(self)
    }

    fn to_chart_with_options(&self, options: &ConvertOptions) -> ConversionResult {
        convert_with_options(self, options)
    }
}
