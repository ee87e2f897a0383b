//! Grid to chart conversion
//!
//! Runs the detection pipeline end to end:
//! locate the header margins, pick the series orientation, then read ticks
//! and series off the grid.
//!
//! # Example
//!
//! ```rust
//! use gridchart::prelude::*;
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Title", "Jan", "Feb", "Mar"],
//!     vec!["Sales", "10", "20", "15"],
//!     vec!["Costs", "5", "8", "7"],
//! ]);
//!
//! let result = convert(&grid);
//! assert_eq!(result.data.len(), 2);
//! assert_eq!(result.ticks.xaxis.ticks[0], (1, CellValue::from("Jan")));
//! ```

use crate::{
    detect_direction, extract_series, extract_ticks, locate, ConversionResult, Direction,
    DispersionMeasure, Grid, Position,
};

/// Options for conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Spread measure used to choose between by-row and by-column series
    pub dispersion: DispersionMeasure,
}

impl ConvertOptions {
    /// Use a different dispersion measure
    pub fn with_dispersion(mut self, dispersion: DispersionMeasure) -> Self {
        self.dispersion = dispersion;
        self
    }
}

/// Where the dataset sits in a grid and which way its series run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Detection {
    pub position: Position,
    pub direction: Direction,
}

/// Locate the dataset in `grid` and detect its orientation.
pub fn detect(grid: &Grid, options: &ConvertOptions) -> Detection {
    let position = locate(grid);
    let direction = detect_direction(grid, &position, options.dispersion);
    Detection {
        position,
        direction,
    }
}

/// Convert `grid` with default options.
pub fn convert(grid: &Grid) -> ConversionResult {
    convert_with_options(grid, &ConvertOptions::default())
}

/// Convert `grid` into series and shared-axis ticks.
///
/// Never fails: a grid without cells converts to an empty result, and
/// missing labels fall back to positional indices.
pub fn convert_with_options(grid: &Grid, options: &ConvertOptions) -> ConversionResult {
    if grid.is_empty() {
        log::debug!("empty grid, nothing to convert");
        return ConversionResult::default();
    }

    let Detection {
        position,
        direction,
    } = detect(grid, options);
    let ticks = extract_ticks(grid, &position, direction);
    let data = extract_series(grid, &position, direction);

    log::debug!(
        "converted {} series with {} ticks",
        data.len(),
        ticks.xaxis.ticks.len()
    );
    ConversionResult::new(data, ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_grids_convert_to_nothing() {
        assert!(convert(&Grid::new()).is_empty());
        assert!(convert(&Grid::from_rows(vec![Vec::<i32>::new(), Vec::new()])).is_empty());
    }

    #[test]
    fn test_detect_reports_layout() {
        let grid = Grid::from_rows(vec![
            vec!["Month", "Sales", "Costs"],
            vec!["Jan", "10", "5"],
            vec!["Feb", "20", "8"],
            vec!["Mar", "15", "7"],
        ]);
        let detection = detect(&grid, &ConvertOptions::default());
        assert_eq!(detection.position.top, 1);
        assert_eq!(detection.position.left, 1);
        assert_eq!(detection.direction, Direction::ByColumn);
    }

    #[test]
    fn test_options_select_dispersion() {
        let options =
            ConvertOptions::default().with_dispersion(DispersionMeasure::StandardDeviation);
        assert_eq!(options.dispersion, DispersionMeasure::StandardDeviation);
    }
}
