//! Boundary detection along a sequence of presence vectors

use crate::bits::BitVector;
use crate::logical::{compare, LogicalOp};

/// Find the first structural boundary in `vectors`.
///
/// Adjacent vectors are compared with `xor`. While fewer than half of the
/// bit positions differ the two are the same kind of row and the scan moves
/// on; the first index `i` where `vectors[i - 1]` and `vectors[i]` differ in
/// at least half their positions is the edge.
///
/// Two empty vectors have the same (empty) shape and never form an edge.
/// A scan that finds no change returns `vectors.len() - 1`. Sequences of
/// zero or one vector return 0.
pub fn find_edge(vectors: &[BitVector]) -> usize {
    if vectors.len() <= 1 {
        return 0;
    }

    for index in 1..vectors.len() {
        let state = compare(LogicalOp::Xor, &vectors[index - 1], &vectors[index]);
        log::trace!(
            "edge scan {}: diff {} of {} bits",
            index,
            state.diff,
            state.length
        );
        if state.length > 0 && state.diff * 2 >= state.length {
            return index;
        }
    }

    vectors.len() - 1
}
