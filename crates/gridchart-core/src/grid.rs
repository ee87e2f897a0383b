//! Row-major cell grid and its transpose

use crate::cell::CellValue;

/// A row-major table of cells
///
/// Rows may have different lengths. Lookups past the end of a row yield
/// [`CellValue::Empty`] rather than failing, so short rows read as absent
/// data instead of zeros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of anything convertible into a cell
    pub fn from_rows<R, V>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// One row, if it exists
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Length of one row (0 for rows past the end)
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Get a cell reference if it exists
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell value, [`CellValue::Empty`] when out of range
    pub fn cell(&self, row: usize, col: usize) -> CellValue {
        self.get(row, col).cloned().unwrap_or(CellValue::Empty)
    }
}

impl From<Vec<Vec<CellValue>>> for Grid {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Vec<CellValue>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<CellValue>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Column-major view of a grid: column `c` becomes row `c`.
///
/// The result has one row per column of the widest source row, each as long
/// as the source grid is tall. Cells missing from short rows are filled with
/// [`CellValue::Empty`].
pub fn transpose(grid: &Grid) -> Grid {
    let width = grid.width();
    (0..width)
        .map(|col| {
            grid.rows()
                .iter()
                .map(|row| row.get(col).cloned().unwrap_or(CellValue::Empty))
                .collect()
        })
        .collect()
}
