//! Presence bit vectors

use gridchart_core::CellValue;

use crate::classify::classify;

/// A presence bit: `Some(1)` data, `Some(0)` label or blank, `None` unknown.
///
/// Values above 1 are accepted by the algebra and compare by magnitude.
pub type Bit = Option<u8>;

/// Ordered presence bits of one row or column
pub type BitVector = Vec<Bit>;

/// Map a row or column of cells to its presence bits, one per cell.
pub fn bit_vector(cells: &[CellValue]) -> BitVector {
    cells.iter().map(|cell| Some(classify(cell))).collect()
}

/// Map every row of a grid (or transposed grid) to its presence bits.
pub fn bit_vectors(rows: &[Vec<CellValue>]) -> Vec<BitVector> {
    rows.iter().map(|row| bit_vector(row)).collect()
}

/// Left-pad the shorter vector with `None` until both have the same length.
///
/// Bits are right-justified: the last positions of both inputs line up.
pub fn pad_left(a: &[Bit], b: &[Bit]) -> (BitVector, BitVector) {
    let len = a.len().max(b.len());
    let pad = |v: &[Bit]| {
        let mut out = vec![None; len - v.len()];
        out.extend_from_slice(v);
        out
    };
    (pad(a), pad(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bit_vector_keeps_length() {
        let row = vec![
            CellValue::from("Sales"),
            CellValue::from("10"),
            CellValue::Empty,
            CellValue::from(2.5),
        ];
        assert_eq!(bit_vector(&row), vec![Some(0), Some(1), Some(0), Some(1)]);
        assert!(bit_vector(&[]).is_empty());
    }

    #[test]
    fn test_pad_left() {
        let (a, b) = pad_left(&[Some(1)], &[Some(0), Some(1), Some(1)]);
        assert_eq!(a, vec![None, None, Some(1)]);
        assert_eq!(b, vec![Some(0), Some(1), Some(1)]);

        let (a, b) = pad_left(&[Some(1), Some(0)], &[Some(0), Some(1)]);
        assert_eq!(a, vec![Some(1), Some(0)]);
        assert_eq!(b, vec![Some(0), Some(1)]);
    }
}
