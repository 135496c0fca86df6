use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// Adapts a plain objective closure into a [`Model`] and an
/// [`OptimizationProblem`].
///
/// The model input is the point itself and the model output is the objective
/// value, so the same `FnObjective` can be passed as both the model and the
/// problem of a solver call.
///
/// # Example
///
/// ```
/// use slope_core::{FnObjective, Model, OptimizationProblem};
///
/// let paraboloid = FnObjective::new(|x: &[f64; 2]| x[0] * x[0] + 2.0 * x[1] * x[1]);
///
/// let input = paraboloid.input(&[1.0, 1.0]).unwrap();
/// let output = paraboloid.call(&input).unwrap();
/// assert_eq!(paraboloid.objective(&input, &output).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, const N: usize> {
    function: F,
}

impl<F, const N: usize> FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps an objective closure.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Evaluates the wrapped closure at `x`.
    pub fn value(&self, x: &[f64; N]) -> f64 {
        (self.function)(x)
    }
}

impl<F, const N: usize> Model for FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Infallible> {
        Ok(self.value(input))
    }
}

impl<F, const N: usize> OptimizationProblem<N> for FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Infallible> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_passes_point_through() {
        let objective = FnObjective::new(|x: &[f64; 3]| x.iter().sum());

        assert_eq!(objective.input(&[1.0, 2.0, 3.0]).unwrap(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn objective_is_closure_value() {
        let objective = FnObjective::new(|x: &[f64; 3]| {
            x[0].powi(3) + x[1].powi(2) + 2.0 * x[2].powi(2) - x[1] * x[2] - x[1]
        });

        let x = [1.0, 2.0, 3.0];
        let output = objective.call(&x).unwrap();

        assert_eq!(output, 1.0 + 4.0 + 18.0 - 6.0 - 2.0);
        assert_eq!(objective.objective(&x, &output).unwrap(), output);
    }
}
