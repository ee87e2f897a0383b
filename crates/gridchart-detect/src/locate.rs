//! Header margin location

use gridchart_core::{transpose, Grid};

use crate::bits::bit_vectors;
use crate::edge::find_edge;

/// Row and column indices bounding the header margins of a grid.
///
/// `0 <= top <= bottom <= height` and `0 <= left <= right <= width`.
/// `top`/`left` are the first data row/column; 0 means no header margin on
/// that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

/// Locate the header/data boundaries of `grid` on all four sides.
///
/// Edges are searched top-down over the rows and left-to-right over the
/// transposed grid; `bottom` and `right` are the next edge after `top` and
/// `left`. A leading edge that lands on the last row (or column) means the
/// scan never saw a real change, so it collapses to 0.
pub fn locate(grid: &Grid) -> Position {
    let rows = bit_vectors(grid.rows());
    let columns = bit_vectors(transpose(grid).rows());

    let top = find_edge(&rows);
    let bottom = find_edge(&rows[top..]) + top;
    let left = find_edge(&columns);
    let right = find_edge(&columns[left..]) + left;

    let position = Position {
        top: collapse_full_scan(top, rows.len()),
        bottom,
        left: collapse_full_scan(left, columns.len()),
        right,
    };
    log::debug!("located dataset: {:?}", position);
    position
}

fn collapse_full_scan(edge: usize, len: usize) -> usize {
    if edge + 1 == len {
        0
    } else {
        edge
    }
}
