//! Expanding search for an initial sign-changing interval.

use regula_core::RealFn;
use thiserror::Error;

/// Parameters for the expanding bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Search {
    step: f64,
    limit: usize,
}

/// Errors that can occur when validating bracket search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("step must be finite and positive")]
    Step,

    #[error("limit must be positive")]
    Limit,
}

impl Default for Search {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 100).unwrap()
    }
}

impl Search {
    /// Creates a search with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite or not positive, or if
    /// `limit` is zero.
    pub fn new(step: f64, limit: usize) -> Result<Self, SearchError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(SearchError::Step);
        }
        if limit == 0 {
            return Err(SearchError::Limit);
        }

        Ok(Self { step, limit })
    }

    /// Returns the radius increment between attempts.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the maximum number of attempts.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Searches outward from `x0` for an interval whose endpoint values
/// have opposite signs.
///
/// Symmetric intervals `(x0 - i*step, x0 + i*step)` are tested for
/// increasing `i`, so the first hit has the smallest radius. When
/// several sign changes lie nearby, the returned interval is simply
/// the first one found, not necessarily the one around the root
/// closest to `x0`.
///
/// Returns `None` if no sign change turns up within `limit` attempts,
/// letting the caller widen the search or fall back to manual bounds.
#[must_use]
pub fn find(f: &impl RealFn, x0: f64, search: &Search) -> Option<[f64; 2]> {
    for i in 1..=search.limit {
        #[allow(clippy::cast_precision_loss)]
        let radius = i as f64 * search.step;
        let a = x0 - radius;
        let b = x0 + radius;

        // A zero product means an endpoint landed exactly on a root,
        // which is not a sign change.
        if f.call(a) * f.call(b) < 0.0 {
            return Some([a, b]);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn expands_to_first_sign_change() {
        let f = |x: f64| x - 2.5;
        let search = Search::new(1.0, 100).expect("valid search");

        let [a, b] = find(&f, 0.0, &search).expect("should find a bracket");
        assert_relative_eq!(a, -3.0);
        assert_relative_eq!(b, 3.0);
    }

    #[test]
    fn smallest_radius_wins() {
        let f = |x: f64| x - 0.05;

        let [a, b] = find(&f, 0.0, &Search::default()).expect("should find a bracket");
        assert_relative_eq!(a, -0.1);
        assert_relative_eq!(b, 0.1);
    }

    #[test]
    fn returns_none_when_no_sign_change_exists() {
        let f = |x: f64| x * x + 1.0;
        assert!(find(&f, 0.0, &Search::default()).is_none());
    }

    #[test]
    fn zero_endpoint_is_not_a_sign_change() {
        // f(3) is exactly zero at radius 3, so the search keeps going
        // and accepts the strictly negative product at radius 4.
        let f = |x: f64| x - 3.0;
        let search = Search::new(1.0, 10).expect("valid search");

        let [a, b] = find(&f, 0.0, &search).expect("should find a bracket");
        assert_relative_eq!(a, -4.0);
        assert_relative_eq!(b, 4.0);
    }

    #[test]
    fn default_search_parameters() {
        let search = Search::default();
        assert_relative_eq!(search.step(), 0.1);
        assert_eq!(search.limit(), 100);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(Search::new(0.0, 10), Err(SearchError::Step)));
        assert!(matches!(Search::new(-1.0, 10), Err(SearchError::Step)));
        assert!(matches!(Search::new(f64::NAN, 10), Err(SearchError::Step)));
        assert!(matches!(Search::new(0.1, 0), Err(SearchError::Limit)));
    }
}
