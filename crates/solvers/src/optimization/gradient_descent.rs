//! Gradient descent with step halving.
//!
//! # Algorithm
//!
//! Each iteration takes one tentative step along the negative
//! finite-difference gradient with a shared scalar step length:
//!
//! ```text
//! x ← x - step · ∇f(x)
//! ```
//!
//! If the objective did not strictly decrease, the step length is halved and
//! the iteration counts as an overshoot. A NaN objective at the trial point
//! is an overshoot too. What happens to the overshot point is set by
//! [`Overshoot`]: by default the search continues from it; with
//! [`Overshoot::Restore`] it rolls back to the point before the step. A
//! trial point with a non-finite objective is always rolled back.
//!
//! The search stops when, within the same iteration, the gradient norm at
//! the pre-step point is at most `precision` and the step improved the
//! objective. The first iteration always runs.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step has been
//! accepted or rejected. Observers can return [`Action::StopEarly`] to
//! return the current point.

mod action;
mod config;
mod descend;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, Overshoot};
pub use error::Error;
pub use event::{Event, StepOutcome};
pub use solution::{Solution, Status};

use slope_core::{Model, Observer, OptimizationProblem};

use super::point::point_from_slice;

/// Minimizes the objective with gradient descent, starting at `initial_point`.
///
/// `initial_point` is copied; the caller's slice is never modified.
/// See the [module docs](self) for the iteration and stopping rule.
///
/// # Errors
///
/// Returns an error if `initial_point` does not have `N` coordinates, if the
/// model or problem fails, or if `max_iters` iterations pass without meeting
/// the stopping rule.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    initial_point: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let x = point_from_slice(initial_point)?;
    descend::descend(model, problem, x, config, observer)
}

/// Minimizes the objective with gradient descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    initial_point: &[f64],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, initial_point, config, ())
}
