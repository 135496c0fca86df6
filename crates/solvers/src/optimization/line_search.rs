//! Newton line search for a stationary point of a one-dimensional function.
//!
//! # Algorithm
//!
//! Given `g(t)`, usually the objective restricted to a ray with
//! [`restrict`], the search looks for `t*` where `g'(t*) ≈ 0`. Both
//! derivatives are finite differences:
//!
//! ```text
//! slope(t)     = (g(t + h) - g(t)) / h
//! curvature(t) = (slope(t + dt) - slope(t)) / dt
//! t            ← t - slope(t) / curvature(t)
//! ```
//!
//! where `h` is [`Config::perturbation`] and `dt` is [`Config::secant_step`].
//! The search starts at `t = 0` and stops once `|slope| <= tolerance`.
//!
//! # Failure modes
//!
//! Newton's method is not globally convergent. A vanishing or non-finite
//! curvature estimate, or a non-finite iterate, ends the search with
//! [`Error::Diverged`]. Running out of iterations ends it with
//! [`Error::NotConverged`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each Newton update. Observers can
//! return [`Action::StopEarly`] to accept the current step.

mod action;
mod config;
mod error;
mod event;
mod ray;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use ray::restrict;
pub use solution::{Solution, Status};

use std::error::Error as StdError;

use slope_core::Observer;

use crate::finite_diff::derivative;

/// Finds a stationary point of `g` with Newton's method, starting at `t = 0`.
///
/// # Errors
///
/// Returns an error if `g` fails, if the iteration diverges, or if the
/// iteration limit is reached before `|g'(t)| <= tolerance`.
pub fn search<G, E, Obs>(g: G, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    G: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
    Obs: Observer<Event, Action>,
{
    let h = config.perturbation();
    let dt = config.secant_step();
    let slope_at = |t: f64| derivative(&g, t, h).map_err(Error::function);

    let mut step = 0.0;
    let mut slope = slope_at(step)?;
    let mut iters = 0;

    while slope.abs() > config.tolerance() || slope.is_nan() {
        if !slope.is_finite() {
            return Err(Error::Diverged { iters, step });
        }
        if iters == config.max_iters() {
            return Err(Error::NotConverged { iters, step, slope });
        }
        iters += 1;

        let curvature = (slope_at(step + dt)? - slope) / dt;
        let next = step - slope / curvature;
        if curvature == 0.0 || !curvature.is_finite() || !next.is_finite() {
            return Err(Error::Diverged { iters, step });
        }

        step = next;
        slope = slope_at(step)?;

        let event = Event {
            iter: iters,
            step,
            slope,
            curvature,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                step,
                slope,
                iters,
            });
        }
    }

    Ok(Solution {
        status: Status::Converged,
        step,
        slope,
        iters,
    })
}

/// Finds a stationary point of `g` without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `g` fails, if the iteration diverges, or if the
/// iteration limit is reached.
pub fn search_unobserved<G, E>(g: G, config: &Config) -> Result<Solution, Error>
where
    G: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    search(g, config, ())
}
