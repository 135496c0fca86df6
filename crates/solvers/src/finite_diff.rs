//! Forward-difference derivatives.
//!
//! Every function here approximates a derivative as
//!
//! ```text
//! (f(x + h) - f(x)) / h
//! ```
//!
//! which is first-order accurate in `h`. There is no central-difference
//! correction. The functions take fallible closures and return the first
//! evaluation error unchanged.

use thiserror::Error;

/// The default perturbation, `1e-5`.
pub const DEFAULT_PERTURBATION: f64 = 1e-5;

/// A finite, non-zero finite-difference perturbation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Perturbation(f64);

/// Error returned when a perturbation is zero or not finite.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("perturbation must be finite and non-zero, got {0}")]
pub struct PerturbationError(pub f64);

impl Perturbation {
    /// Creates a perturbation.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is zero, infinite, or NaN.
    pub fn new(h: f64) -> Result<Self, PerturbationError> {
        if h == 0.0 || !h.is_finite() {
            return Err(PerturbationError(h));
        }
        Ok(Self(h))
    }

    /// Returns the perturbation value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Self(DEFAULT_PERTURBATION)
    }
}

impl TryFrom<f64> for Perturbation {
    type Error = PerturbationError;

    fn try_from(h: f64) -> Result<Self, Self::Error> {
        Self::new(h)
    }
}

/// Approximates `∂f/∂x[index]` at `point`.
///
/// The caller's point is not modified; the perturbation is applied to a copy.
///
/// # Errors
///
/// Returns the error from `f` if either evaluation fails.
///
/// # Panics
///
/// Panics if `index >= N`.
pub fn partial_derivative<F, E, const N: usize>(
    f: F,
    point: &[f64; N],
    index: usize,
    h: Perturbation,
) -> Result<f64, E>
where
    F: Fn(&[f64; N]) -> Result<f64, E>,
{
    let base = f(point)?;
    shifted_difference(&f, point, index, base, h.get())
}

/// Approximates the gradient of `f` at `point`.
///
/// Each partial derivative is computed independently with the same `h`.
/// The base value `f(point)` is evaluated once and shared, so a gradient
/// costs `N + 1` evaluations.
///
/// # Errors
///
/// Returns the error from `f` if any evaluation fails.
pub fn gradient<F, E, const N: usize>(f: F, point: &[f64; N], h: Perturbation) -> Result<[f64; N], E>
where
    F: Fn(&[f64; N]) -> Result<f64, E>,
{
    let base = f(point)?;
    let mut grad = [0.0; N];
    for (i, partial) in grad.iter_mut().enumerate() {
        *partial = shifted_difference(&f, point, i, base, h.get())?;
    }
    Ok(grad)
}

/// Approximates `g'(t)` for a scalar function `g`.
///
/// # Errors
///
/// Returns the error from `g` if either evaluation fails.
pub fn derivative<G, E>(g: G, t: f64, h: Perturbation) -> Result<f64, E>
where
    G: Fn(f64) -> Result<f64, E>,
{
    let h = h.get();
    Ok((g(t + h)? - g(t)?) / h)
}

fn shifted_difference<F, E, const N: usize>(
    f: &F,
    point: &[f64; N],
    index: usize,
    base: f64,
    h: f64,
) -> Result<f64, E>
where
    F: Fn(&[f64; N]) -> Result<f64, E>,
{
    let mut shifted = *point;
    shifted[index] += h;
    Ok((f(&shifted)? - base) / h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn cubic(x: &[f64; 3]) -> Result<f64, Infallible> {
        Ok(x[0].powi(3) + x[1].powi(2) + 2.0 * x[2].powi(2) - x[1] * x[2] - x[1])
    }

    #[test]
    fn perturbation_rejects_zero_and_non_finite() {
        assert_eq!(Perturbation::new(0.0), Err(PerturbationError(0.0)));
        assert!(Perturbation::new(f64::INFINITY).is_err());
        assert!(Perturbation::new(f64::NAN).is_err());
        assert!(Perturbation::try_from(-1e-6).is_ok());
    }

    #[test]
    fn default_perturbation_is_small() {
        assert_relative_eq!(Perturbation::default().get(), 1e-5);
    }

    #[test]
    fn gradient_of_cubic_at_origin() {
        let grad = gradient(cubic, &[0.0; 3], Perturbation::default()).unwrap();

        // ∂f/∂x = 3x², ∂f/∂y = 2y - z - 1, ∂f/∂z = 4z - y; forward error is O(h).
        assert_relative_eq!(grad[0], 0.0, epsilon = 1e-8);
        assert_relative_eq!(grad[1], -1.0, epsilon = 1e-4);
        assert_relative_eq!(grad[2], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn gradient_error_shrinks_with_h() {
        let point = [1.0, 2.0, 3.0];
        let exact = [3.0, 2.0 * 2.0 - 3.0 - 1.0, 4.0 * 3.0 - 2.0];

        let error = |h: f64| {
            let grad = gradient(cubic, &point, Perturbation::new(h).unwrap()).unwrap();
            grad.iter()
                .zip(exact)
                .map(|(g, e)| (g - e).abs())
                .fold(0.0, f64::max)
        };

        assert!(error(1e-4) < error(1e-2));
        assert!(error(1e-2) < error(1.0));
    }

    #[test]
    fn partial_derivative_matches_gradient_entry() {
        let point = [0.5, -1.0, 2.0];
        let h = Perturbation::default();
        let grad = gradient(cubic, &point, h).unwrap();

        for (i, g) in grad.iter().enumerate() {
            let partial = partial_derivative(cubic, &point, i, h).unwrap();
            assert_eq!(partial, *g);
        }
    }

    #[test]
    fn partial_derivative_is_forward_difference() {
        let f = |x: &[f64; 1]| Ok::<_, Infallible>(x[0] * x[0]);
        let h = Perturbation::new(0.5).unwrap();

        // ((1 + 0.5)² - 1²) / 0.5 = 2.5, not the exact slope 2.
        assert_relative_eq!(partial_derivative(f, &[1.0], 0, h).unwrap(), 2.5);
    }

    #[test]
    fn caller_point_is_untouched() {
        let point = [1.0, 1.0, 1.0];
        let _ = gradient(cubic, &point, Perturbation::default()).unwrap();

        assert_eq!(point, [1.0, 1.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn partial_derivative_panics_on_bad_index() {
        let _ = partial_derivative(cubic, &[0.0; 3], 3, Perturbation::default());
    }

    #[test]
    fn derivative_of_scalar_function() {
        let g = |t: f64| Ok::<_, Infallible>((t - 2.0).powi(2));

        let slope = derivative(g, 0.0, Perturbation::default()).unwrap();
        assert_relative_eq!(slope, -4.0, epsilon = 1e-4);
    }

    #[test]
    fn evaluation_errors_propagate() {
        #[derive(Debug, PartialEq)]
        struct OutOfDomain;

        let f = |x: &[f64; 2]| if x[1] > 0.0 { Err(OutOfDomain) } else { Ok(x[0]) };

        assert_eq!(gradient(f, &[0.0, 0.0], Perturbation::default()), Err(OutOfDomain));
        assert_eq!(gradient(f, &[0.0, -1.0], Perturbation::default()), Ok([1.0, 0.0]));
    }
}
