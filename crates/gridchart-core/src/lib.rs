//! # gridchart-core
//!
//! Core data structures for the gridchart dataset detector.
//!
//! This crate provides the fundamental types used throughout gridchart:
//! - [`CellValue`] - A raw cell as produced by a text parser
//! - [`Grid`] - A row-major, possibly jagged, table of cells
//! - [`transpose`] - The column-major view of a grid
//!
//! ## Example
//!
//! ```rust
//! use gridchart_core::{transpose, CellValue, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![CellValue::from("Title"), CellValue::from("Jan")],
//!     vec![CellValue::from("Sales"), CellValue::from(10)],
//! ]);
//!
//! let columns = transpose(&grid);
//! assert_eq!(columns.height(), 2);
//! assert_eq!(columns.cell(1, 0), CellValue::from("Jan"));
//! ```

pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use cell::{CellValue, SharedString, StringPool};
pub use error::{Error, Result};
pub use grid::{transpose, Grid};
