/// A real-valued function of one real variable.
///
/// Implementations must be deterministic, always producing the same
/// result for a given `x`, which makes them a stable foundation for
/// solvers and instrumentation. Solvers additionally assume the
/// function is continuous on any interval they evaluate it over;
/// violations are not detected.
pub trait RealFn {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation so plain closures work directly.
impl<F> RealFn for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
