//! Steepest descent with a Newton line search along the unit gradient.
//!
//! # Algorithm
//!
//! While the finite-difference gradient norm is at least `precision`:
//!
//! 1. Normalize the gradient into the unit direction `S`.
//! 2. Run a [line search](crate::optimization::line_search) on
//!    `g(t) = f(x − t·S)` for a stationary step `t*`.
//! 3. Move to `x − t*·S` and recompute the gradient.
//!
//! If the starting gradient norm is already below `precision`, the initial
//! point is returned after zero iterations.
//!
//! Gradient descent stops once its norm is `<= precision`, while steepest
//! descent keeps iterating until its norm is `< precision`, so a norm exactly
//! equal to `precision` still triggers one more line search here.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each outer iteration. Observers can
//! return [`Action::StopEarly`] to return the current point.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use slope_core::{Model, Observer, OptimizationProblem};

use crate::{
    finite_diff::gradient,
    vector::{euclidean_norm, unit_direction},
};

use super::{
    evaluate::{evaluate, objective},
    line_search::{self, restrict},
    point::point_from_slice,
};

/// Minimizes the objective with steepest descent, starting at `initial_point`.
///
/// `initial_point` is copied; the caller's slice is never modified.
///
/// # Errors
///
/// Returns an error if `initial_point` does not have `N` coordinates, if the
/// model or problem fails, if a line search fails, or if `max_iters` outer
/// iterations pass while the gradient norm is still at least `precision`.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    initial_point: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let f = |x: &[f64; N]| objective(model, problem, x);

    let mut current = evaluate(model, problem, point_from_slice(initial_point)?)?;
    let mut grad = gradient(&f, &current.x, config.perturbation())?;
    let mut gradient_norm = euclidean_norm(&grad);
    let mut iters = 0;

    while gradient_norm >= config.precision() || gradient_norm.is_nan() {
        if iters == config.max_iters() {
            return Err(Error::NonConvergence {
                iters,
                gradient_norm,
            });
        }
        iters += 1;

        let direction = unit_direction(&grad).ok_or(Error::NonConvergence {
            iters,
            gradient_norm,
        })?;

        let ray = restrict(&f, current.x, direction);
        let search = line_search::search_unobserved(ray, config.line_search())
            .map_err(|source| Error::LineSearch { iter: iters, source })?;

        let next: [f64; N] = std::array::from_fn(|i| current.x[i] - search.step * direction[i]);
        current = evaluate(model, problem, next)?;
        grad = gradient(&f, &current.x, config.perturbation())?;
        gradient_norm = euclidean_norm(&grad);

        let event = Event {
            iter: iters,
            x: current.x,
            objective: current.objective,
            gradient_norm,
            direction,
            step: search.step,
            line_search_iters: search.iters,
            snapshot: &current.snapshot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: current.x,
                objective: current.objective,
                gradient_norm,
                snapshot: current.snapshot,
                iters,
            });
        }
    }

    Ok(Solution {
        status: Status::Converged,
        x: current.x,
        objective: current.objective,
        gradient_norm,
        snapshot: current.snapshot,
        iters,
    })
}

/// Minimizes the objective with steepest descent without observer support.
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
