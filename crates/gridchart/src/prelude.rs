//! Prelude module - common imports for gridchart users
//!
//! ```rust
//! use gridchart::prelude::*;
//! ```

pub use crate::{
    // Conversion
    convert,
    convert_with_options,
    detect,
    // Cell types
    CellValue,
    // Output types
    ConversionResult,
    ConvertOptions,
    // I/O types
    CsvReadOptions,
    CsvReader,
    Detection,
    // Detection types
    Direction,
    DispersionMeasure,
    // Error types
    Error,
    Grid,
    // Extension traits
    GridExt,
    Position,
    Result,
    Series,
    Ticks,
};
