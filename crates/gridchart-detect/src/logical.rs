//! Multi-valued bitwise algebra over presence vectors
//!
//! [`compare`] lines up two [`BitVector`]s (left-padding the shorter one with
//! unknown bits), applies a [`LogicalOp`] position by position and sums the
//! per-bit bookkeeping into a [`LogicalResult`]. An unknown bit (`None`) is a
//! wildcard: it never counts as a difference and it poisons the result bit to
//! `None` wherever the outcome would depend on it.
//!
//! The `diff / length` ratio of an `xor` comparison is what edge detection
//! uses to decide whether two rows have the same shape.

use std::fmt;
use std::str::FromStr;

use gridchart_core::{Error, Result};

use crate::bits::{pad_left, Bit, BitVector};

/// Bitwise operator applied by [`compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogicalOp {
    /// Totally different
    Xor,
    /// Similar or the same (rounds up)
    Or,
    /// Identical (rounds down)
    And,
    /// Complement of `and`
    Nand,
}

impl LogicalOp {
    /// Lowercase operator name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::Xor => "xor",
            LogicalOp::Or => "or",
            LogicalOp::And => "and",
            LogicalOp::Nand => "nand",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xor" => Ok(LogicalOp::Xor),
            "or" => Ok(LogicalOp::Or),
            "and" => Ok(LogicalOp::And),
            "nand" => Ok(LogicalOp::Nand),
            _ => Err(Error::invalid_argument(format!(
                "unknown logical operator '{s}' (expected xor, or, and, nand)"
            ))),
        }
    }
}

/// Outcome of applying an operator to one pair of bits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BitOutcome {
    /// Resulting bit
    pub value: Bit,
    /// 1 if both inputs are known and differ
    pub diff: usize,
    /// Estimated bit changes needed to reach either input from `value`
    pub change: f64,
    /// Amount rounded up
    pub up: f64,
    /// Amount rounded down
    pub down: f64,
}

/// Summed outcome of [`compare`]
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalResult {
    /// Result bits, one per (padded) position
    pub value: BitVector,
    /// Positions where both inputs are known and differ
    pub diff: usize,
    /// Estimated bit changes needed to reach either input from `value`
    pub change: f64,
    /// Number of positions after padding
    pub length: usize,
    /// Total amount rounded up
    pub up: f64,
    /// Total amount rounded down
    pub down: f64,
    /// Operator that produced this result
    pub op: LogicalOp,
}

impl LogicalResult {
    fn empty(op: LogicalOp, length: usize) -> Self {
        Self {
            value: Vec::with_capacity(length),
            diff: 0,
            change: 0.0,
            length,
            up: 0.0,
            down: 0.0,
            op,
        }
    }

    fn accumulate(mut self, outcome: BitOutcome) -> Self {
        self.value.push(outcome.value);
        self.diff += outcome.diff;
        self.change += outcome.change;
        self.up += outcome.up;
        self.down += outcome.down;
        self
    }
}

/// Apply `op` to every aligned pair of bits of `a` and `b`.
///
/// The shorter input is left-padded with unknown bits first, so
/// `length == max(a.len(), b.len())`.
pub fn compare(op: LogicalOp, a: &[Bit], b: &[Bit]) -> LogicalResult {
    let (a, b) = pad_left(a, b);
    a.iter()
        .zip(&b)
        .map(|(&x, &y)| combine(op, x, y))
        .fold(LogicalResult::empty(op, a.len()), LogicalResult::accumulate)
}

/// Apply `op` to a single pair of bits.
pub fn combine(op: LogicalOp, a: Bit, b: Bit) -> BitOutcome {
    let mut out = BitOutcome {
        diff: usize::from(matches!((a, b), (Some(x), Some(y)) if x != y)),
        ..BitOutcome::default()
    };

    match op {
        LogicalOp::Xor => match (a, b) {
            (Some(x), Some(y)) if x != y => {
                out.value = Some(if x == 1 || y == 1 { 1 } else { x.max(y) });
                out.change = 0.5;
                out.up = 0.5;
            }
            (Some(x), Some(_)) => {
                out.value = Some(0);
                if x != 0 {
                    out.change = 1.0;
                    out.down = 1.0;
                }
            }
            _ => {}
        },
        LogicalOp::Or => {
            if let (Some(x), Some(y)) = (a, b) {
                let value = x.max(y);
                out.value = Some(value);
                if value != 0 {
                    out.change = 0.5;
                    out.up = 0.5;
                }
            }
        }
        LogicalOp::And => match (a, b) {
            _ if a == b => out.value = a,
            (Some(x), Some(y)) => {
                out.value = Some(0);
                if x != 0 && y != 0 {
                    out.change = 1.0;
                    out.down = 1.0;
                } else {
                    out.change = 0.5;
                    out.up = 0.5;
                }
            }
            _ => {}
        },
        LogicalOp::Nand => match (a, b) {
            (Some(0), Some(0)) => {
                out.value = Some(1);
                out.change = 1.0;
                out.up = 1.0;
            }
            _ if a == b => {
                if a.is_some() {
                    out.value = Some(0);
                    out.change = 1.0;
                    out.down = 1.0;
                }
            }
            (Some(x), Some(y)) => {
                out.value = Some(match (x, y) {
                    (0, y) => y,
                    (x, 0) => x,
                    (x, y) => x.min(y),
                });
                out.change = 0.5;
                out.up = 0.5;
            }
            _ => {}
        },
    }

    out
}
