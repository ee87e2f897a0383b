//! Series orientation detection

use gridchart_core::{CellValue, Grid};

use crate::classify::numeric_value;
use crate::locate::Position;
use crate::stats::DispersionMeasure;

/// Whether each data series runs down a column or along a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One series per data column
    ByColumn,
    /// One series per data row
    ByRow,
}

impl Direction {
    pub fn by_column(&self) -> bool {
        matches!(self, Direction::ByColumn)
    }

    pub fn by_row(&self) -> bool {
        matches!(self, Direction::ByRow)
    }
}

// Serialized as the two mutually exclusive flags the renderer side expects.
#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Direction", 2)?;
        state.serialize_field("bycolumn", &self.by_column())?;
        state.serialize_field("byrow", &self.by_row())?;
        state.end()
    }
}

/// The first data row: cells of row `top` from column `left` on.
pub fn first_data_row(grid: &Grid, position: &Position) -> Vec<CellValue> {
    grid.row(position.top)
        .and_then(|row| row.get(position.left..))
        .map(<[CellValue]>::to_vec)
        .unwrap_or_default()
}

/// The first data column: cells of column `left` from row `top` down.
///
/// Rows too short to reach `left` contribute [`CellValue::Empty`].
pub fn first_data_column(grid: &Grid, position: &Position) -> Vec<CellValue> {
    (position.top..grid.height())
        .map(|row| grid.cell(row, position.left))
        .collect()
}

/// Decide the series orientation of the data block at `position`.
///
/// The dispersion of the first data row is compared with that of the first
/// data column. A row that varies more than the column means each column
/// is a series; otherwise each row is.
pub fn detect_direction(grid: &Grid, position: &Position, measure: DispersionMeasure) -> Direction {
    let row0 = numbers(&first_data_row(grid, position));
    let column0 = numbers(&first_data_column(grid, position));

    let row_spread = measure.measure(&row0);
    let column_spread = measure.measure(&column0);

    let direction = if row_spread > column_spread {
        Direction::ByColumn
    } else {
        Direction::ByRow
    };
    log::debug!(
        "{} spread: row {} vs column {} -> {:?}",
        measure,
        row_spread,
        column_spread,
        direction
    );
    direction
}

fn numbers(cells: &[CellValue]) -> Vec<f64> {
    cells.iter().filter_map(numeric_value).collect()
}
