/// Configuration for the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Acceptance threshold on `|f(x3)|`.
    pub tol: f64,
    /// Maximum number of iteration passes.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates the tolerance and iteration budget.
    ///
    /// A zero tolerance is accepted even though it makes the success
    /// check unsatisfiable for most functions; the iteration budget
    /// still bounds the solve.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite, or if
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err("tol must be finite and non-negative");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be positive");
        }
        Ok(())
    }
}
