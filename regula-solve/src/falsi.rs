//! False-position (regula falsi) iteration within a given bracket.

mod config;
mod error;
mod record;
mod solution;

pub use config::Config;
pub use error::Error;
pub use record::Record;
pub use solution::{Solution, Status};

use regula_core::{Observer, RealFn};

/// Control actions supported by the false-position solver.
pub enum Action {
    /// Stop the solver early.
    StopEarly,
}

/// Iteration event emitted by the false-position solver.
pub struct Event<'a> {
    /// Iteration counter (1-based within the solve loop).
    pub iter: usize,
    /// Bracket the pass started from.
    pub bracket: [f64; 2],
    /// The record produced by this pass.
    pub record: &'a Record,
}

/// Finds a root of `f` using the false-position method.
/// Observers see each pass's record and bracket state.
///
/// The bracket endpoints are taken exactly as given: the opposite-sign
/// condition on `f` is the caller's responsibility, and the endpoint
/// roles are preserved so that repeated calls with the same inputs
/// produce identical traces.
///
/// Exhausting `config.max_iters` without meeting the tolerance is not
/// an error: the solve returns its last estimate with
/// [`Status::MaxIters`] and the full trace.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if `f` takes the same
/// value at both bracket endpoints during any pass, which leaves the
/// secant step undefined.
pub fn solve<Obs>(
    f: &impl RealFn,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [mut x1, mut x2] = bracket;
    let mut trace = Vec::new();
    let mut iter = 0;

    loop {
        iter += 1;

        let f1 = f.call(x1);
        let f2 = f.call(x2);

        // The secant step divides by f1 - f2, so exact equality is
        // fatal on any pass, not just the first.
        #[allow(clippy::float_cmp)]
        if f1 == f2 {
            return Err(Error::DegenerateSecant { x1, x2, value: f1 });
        }

        let x3 = x2 - f2 * (x1 - x2) / (f1 - f2);
        let f3 = f.call(x3);

        let record = Record {
            iter,
            x1,
            x2,
            x3,
            f1,
            f2,
            f3,
        };
        trace.push(record);

        let event = Event {
            iter,
            bracket: [x1, x2],
            record: &record,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, record, trace));
                }
            }
        }

        if f3.abs() < config.tol {
            return Ok(Solution::new(Status::Converged, record, trace));
        }

        if iter == config.max_iters {
            return Ok(Solution::new(Status::MaxIters, record, trace));
        }

        // A zero product (x3 landed exactly on a root) takes the x1
        // branch.
        if f1 * f3 < 0.0 {
            x2 = x3;
        } else {
            x1 = x3;
        }
    }
}

/// Runs the false-position solver without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid or a pass encounters a
/// degenerate secant step.
pub fn solve_unobserved(
    f: &impl RealFn,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
