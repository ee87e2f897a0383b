//! # gridchart-csv
//!
//! Reads delimited text into a [`gridchart_core::Grid`].

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
