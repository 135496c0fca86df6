//! Solvers for unconstrained minimization of a scalar objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective using
//! forward-difference gradients.
//!
//! # Solvers
//!
//! - [`gradient_descent`]: fixed-direction steps along the negative gradient,
//!   with the step length halved after every overshoot
//! - [`steepest_descent`]: a [`line_search`] along the unit negative gradient
//!   picks each step
//! - [`line_search`]: Newton's method on the slope of a one-dimensional
//!   function
//!
//! For a plain closure objective, [`minimize_gradient_descent`] and
//! [`minimize_steepest_descent`] run a solver with its default config.
//!
//! [`OptimizationProblem`]: slope_core::OptimizationProblem

mod evaluate;
mod point;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate, objective};
pub use point::DimensionMismatch;

pub mod gradient_descent;
pub mod line_search;
pub mod steepest_descent;

use slope_core::FnObjective;

/// Minimizes `f` with gradient descent from `initial_point`.
///
/// Returns the final point and the objective there.
///
/// # Example
///
/// ```
/// use slope_solvers::optimization::minimize_gradient_descent;
///
/// let (x, value) = minimize_gradient_descent(
///     |x: &[f64; 2]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2),
///     &[0.0, 0.0],
///     1e-3,
/// )?;
///
/// assert!((x[0] - 1.0).abs() < 1e-3);
/// assert!((x[1] + 2.0).abs() < 1e-3);
/// assert!(value < 1e-6);
/// # Ok::<(), slope_solvers::optimization::gradient_descent::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if `precision` is not finite and positive, or under the
/// conditions listed on [`gradient_descent::minimize`].
pub fn minimize_gradient_descent<F, const N: usize>(
    f: F,
    initial_point: &[f64],
    precision: f64,
) -> Result<([f64; N], f64), gradient_descent::Error>
where
    F: Fn(&[f64; N]) -> f64,
{
    let config = gradient_descent::Config::new(precision)?;
    let objective = FnObjective::new(f);

    let solution =
        gradient_descent::minimize_unobserved(&objective, &objective, initial_point, &config)?;
    Ok((solution.x, solution.objective))
}

/// Minimizes `f` with steepest descent from `initial_point`.
///
/// Returns the final point and the objective there.
///
/// # Example
///
/// ```
/// use slope_solvers::optimization::minimize_steepest_descent;
///
/// let cubic = |x: &[f64; 3]| {
///     x[0].powi(3) + x[1].powi(2) + 2.0 * x[2].powi(2) - x[1] * x[2] - x[1]
/// };
///
/// let (x, value) = minimize_steepest_descent(cubic, &[0.0, 0.0, 0.0], 1e-3)?;
///
/// assert!((x[1] - 4.0 / 7.0).abs() < 1e-3);
/// assert!((x[2] - 1.0 / 7.0).abs() < 1e-3);
/// assert!((value + 2.0 / 7.0).abs() < 1e-6);
/// # Ok::<(), slope_solvers::optimization::steepest_descent::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if `precision` is not finite and positive, or under the
/// conditions listed on [`steepest_descent::minimize`].
pub fn minimize_steepest_descent<F, const N: usize>(
    f: F,
    initial_point: &[f64],
    precision: f64,
) -> Result<([f64; N], f64), steepest_descent::Error>
where
    F: Fn(&[f64; N]) -> f64,
{
    let config = steepest_descent::Config::new(precision)?;
    let objective = FnObjective::new(f);

    let solution =
        steepest_descent::minimize_unobserved(&objective, &objective, initial_point, &config)?;
    Ok((solution.x, solution.objective))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_precision_is_rejected() {
        let f = |x: &[f64; 1]| x[0] * x[0];

        assert!(matches!(
            minimize_gradient_descent(f, &[1.0], 0.0),
            Err(gradient_descent::Error::InvalidConfig(
                gradient_descent::ConfigError::Precision
            ))
        ));
        assert!(matches!(
            minimize_steepest_descent(f, &[1.0], -1e-3),
            Err(steepest_descent::Error::InvalidConfig(
                steepest_descent::ConfigError::Precision
            ))
        ));
    }

    #[test]
    fn both_solvers_agree_on_convex_objective() {
        let f = |x: &[f64; 2]| (x[0] - 1.0).powi(2) + 2.0 * (x[1] + 2.0).powi(2);

        let (gd, _) = minimize_gradient_descent(f, &[0.0, 0.0], 1e-3).unwrap();
        let (sd, _) = minimize_steepest_descent(f, &[0.0, 0.0], 1e-3).unwrap();

        for (a, b) in gd.iter().zip(sd) {
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn initial_point_is_left_untouched() {
        let start = vec![0.0, 0.0];

        minimize_gradient_descent(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1], &start, 1e-3).unwrap();

        assert_eq!(start, [0.0, 0.0]);
    }
}
