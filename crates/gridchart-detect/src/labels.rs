//! Shared-axis tick labels

use gridchart_chart::{Axis, Ticks};
use gridchart_core::Grid;

use crate::locate::Position;
use crate::orientation::Direction;

/// Build the x-axis ticks for the data block at `position`.
///
/// By column, each data row gets a tick labeled from the column just left
/// of `left`. By row, each data column gets a tick labeled from the row just
/// above `top`. Without such a label column or row the tick index is its own
/// label.
pub fn extract_ticks(grid: &Grid, position: &Position, direction: Direction) -> Ticks {
    let mut axis = Axis::new();

    match direction {
        Direction::ByColumn => {
            let label_column = position.left.checked_sub(1);
            for row in position.top..grid.height() {
                match label_column {
                    Some(col) => axis.push_label(grid.cell(row, col)),
                    None => push_index_label(&mut axis),
                }
            }
        }
        Direction::ByRow => match position.top.checked_sub(1) {
            Some(label_row) => {
                for col in position.left..grid.row_len(label_row) {
                    axis.push_label(grid.cell(label_row, col));
                }
            }
            None => {
                for _ in position.left..grid.row_len(position.top) {
                    push_index_label(&mut axis);
                }
            }
        },
    }

    Ticks::new(axis)
}

fn push_index_label(axis: &mut Axis) {
    let index = axis.ticks.len() + 1;
    axis.push_label(index);
}
