//! Series extraction from the data block

use gridchart_chart::Series;
use gridchart_core::{CellValue, Grid};

use crate::classify::numeric_or_raw;
use crate::locate::Position;
use crate::orientation::Direction;

/// Build one labeled series per data column (by column) or data row (by row).
///
/// By column there is one series for each cell of row `top` from `left` on,
/// holding that column's cells from `top` down and labeled from row
/// `top - 1`. By row there is one series for each row from `top` down,
/// holding its cells from `left` on and labeled from column `left - 1`.
/// Without a label row or column the first data cell doubles as the label.
///
/// Cells missing from short rows become [`CellValue::Empty`] points.
pub fn extract_series(grid: &Grid, position: &Position, direction: Direction) -> Vec<Series> {
    let Position { top, left, .. } = *position;

    match direction {
        Direction::ByColumn => (left..grid.row_len(top))
            .map(|col| {
                let label = grid.cell(top.checked_sub(1).unwrap_or(top), col);
                let data = (top..grid.height())
                    .map(|row| grid.cell(row, col))
                    .collect::<Vec<_>>();
                series(label, &data)
            })
            .collect(),
        Direction::ByRow => (top..grid.height())
            .map(|row| {
                let label = grid.cell(row, left.checked_sub(1).unwrap_or(left));
                let data = grid
                    .row(row)
                    .and_then(|cells| cells.get(left..))
                    .unwrap_or_default();
                series(label, data)
            })
            .collect(),
    }
}

fn series(label: CellValue, cells: &[CellValue]) -> Series {
    let data = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| (i + 1, numeric_or_raw(cell)))
        .collect();
    Series::new(label).with_data(data)
}
