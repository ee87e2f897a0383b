//! CSV options

/// Options for reading CSV text
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Drop the first record instead of keeping it as a grid row.
    ///
    /// Off by default: header rows are part of what gets detected.
    pub has_header: bool,
    /// Trim whitespace around fields
    pub trim: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            trim: true,
        }
    }
}
