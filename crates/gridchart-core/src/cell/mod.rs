//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a grid cell
//! - [`SharedString`] and [`StringPool`] - Interned text storage

mod value;

pub use value::{CellValue, SharedString, StringPool};
