//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gridchart_core::{CellValue, Grid, StringPool};

/// CSV reader producing a [`Grid`]
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Records may have different field counts; each becomes a row of its own
    /// length. Empty fields become [`CellValue::Empty`], everything else is
    /// kept as text.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let mut pool = StringPool::new();
        let mut grid = Grid::new();

        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::String(pool.intern(field))
                    }
                })
                .collect();
            grid.push_row(row);
        }

        log::debug!(
            "read {} CSV rows ({} distinct strings)",
            grid.height(),
            pool.len()
        );
        Ok(grid)
    }

    /// Read CSV from a string into a grid
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read(text.as_bytes(), options)
    }
}
