//! Seed point to root estimate, end to end.

use approx::assert_relative_eq;
use regula_solve::bracket::{self, Search};
use regula_solve::falsi::{self, Config, Status};

#[test]
fn seed_to_root_pipeline() {
    let f = |x: f64| x * x - 2.0;

    let bracket = bracket::find(&f, 1.0, &Search::default()).expect("should find a bracket");
    assert_relative_eq!(bracket[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(bracket[1], 1.5, epsilon = 1e-12);

    let config = Config {
        tol: 1e-4,
        max_iters: 50,
    };
    let solution = falsi::solve_unobserved(&f, bracket, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-4);
}

#[test]
fn search_failure_leaves_the_caller_in_control() {
    let f = |x: f64| x * x + 1.0;

    let narrow = Search::new(0.1, 5).expect("valid search");
    assert!(bracket::find(&f, 0.0, &narrow).is_none());

    // Widening the search is a caller decision, not a retry inside the
    // finder; for this function it still finds nothing.
    let wide = Search::new(1.0, 100).expect("valid search");
    assert!(bracket::find(&f, 0.0, &wide).is_none());
}
