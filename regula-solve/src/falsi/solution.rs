#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use super::Record;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a false-position solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub root: f64,
    /// Function value at the reported root estimate.
    pub residual: f64,
    /// Every record produced by the solve, in iteration order.
    pub trace: Vec<Record>,
}

impl Solution {
    /// Constructs a solution from the last record of a solve.
    pub(super) fn new(status: Status, last: Record, trace: Vec<Record>) -> Self {
        Self {
            status,
            root: last.x3,
            residual: last.f3,
            trace,
        }
    }

    /// Returns the number of passes the solver ran.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }
}
