#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// One pass of the false-position iteration.
///
/// `x1` and `x2` are the bracket endpoints the pass started from, `x3`
/// the false-position estimate computed from them, and `f1`, `f2`,
/// `f3` the corresponding function values. Values are stored at full
/// precision; rounding for display is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
}
