use thiserror::Error;

/// Errors that can occur during false-position solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The function took the same value at both bracket endpoints, so
    /// the secant through them has no intercept.
    #[error("degenerate secant step: f({x1}) == f({x2}) == {value}")]
    DegenerateSecant { x1: f64, x2: f64, value: f64 },
}
