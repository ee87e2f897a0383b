//! # gridchart-detect
//!
//! Schema-free detection of the dataset inside a raw cell grid.
//!
//! The pipeline is:
//! 1. [`locate`] the header margins by comparing presence bit vectors of
//!    adjacent rows and columns ([`find_edge`], [`compare`])
//! 2. [`detect_direction`] decides whether series run by row or by column
//! 3. [`extract_ticks`] and [`extract_series`] read labels and values off
//!    the grid
//!
//! ## Example
//!
//! ```rust
//! use gridchart_core::Grid;
//! use gridchart_detect::{detect_direction, locate, Direction, DispersionMeasure};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Title", "Jan", "Feb", "Mar"],
//!     vec!["Sales", "10", "20", "15"],
//!     vec!["Costs", "5", "8", "7"],
//! ]);
//!
//! let position = locate(&grid);
//! assert_eq!((position.top, position.left), (1, 1));
//!
//! let direction = detect_direction(&grid, &position, DispersionMeasure::default());
//! assert_eq!(direction, Direction::ByRow);
//! ```

pub mod bits;
pub mod classify;
pub mod edge;
pub mod labels;
pub mod locate;
pub mod logical;
pub mod orientation;
pub mod series;
pub mod stats;

pub use bits::{bit_vector, bit_vectors, pad_left, Bit, BitVector};
pub use classify::{classify, numeric_or_raw, numeric_value};
pub use edge::find_edge;
pub use labels::extract_ticks;
pub use locate::{locate, Position};
pub use logical::{combine, compare, BitOutcome, LogicalOp, LogicalResult};
pub use orientation::{detect_direction, first_data_column, first_data_row, Direction};
pub use series::extract_series;
pub use stats::DispersionMeasure;
