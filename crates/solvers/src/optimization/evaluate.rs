use thiserror::Error;

use slope_core::{Model, OptimizationProblem, Snapshot};

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an optimization problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the objective from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(model: &M, problem: &P, x: [f64; N]) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

/// Evaluates only the objective at `x`, discarding the snapshot.
///
/// This is the scalar function handed to the finite-difference routines.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn objective<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: &[f64; N],
) -> Result<f64, EvalError<M::Error, P::Error>>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    evaluate(model, problem, *x).map(|eval| eval.objective)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Distance;

    impl Model for Distance {
        type Input = (f64, f64);
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &(f64, f64)) -> Result<f64, Infallible> {
            Ok(input.0.hypot(input.1))
        }
    }

    #[derive(Debug, Error)]
    #[error("negative coordinates are not allowed")]
    struct Negative;

    /// Objective is the squared distance; rejects negative coordinates.
    struct SquaredDistance;

    impl OptimizationProblem<2> for SquaredDistance {
        type Input = (f64, f64);
        type Output = f64;
        type Error = Negative;

        fn input(&self, x: &[f64; 2]) -> Result<(f64, f64), Negative> {
            if x.iter().any(|c| *c < 0.0) {
                return Err(Negative);
            }
            Ok((x[0], x[1]))
        }

        fn objective(&self, _input: &(f64, f64), output: &f64) -> Result<f64, Negative> {
            Ok(output * output)
        }
    }

    #[test]
    fn evaluate_captures_snapshot() {
        let eval = evaluate(&Distance, &SquaredDistance, [3.0, 4.0]).unwrap();

        assert_eq!(eval.x, [3.0, 4.0]);
        assert_relative_eq!(eval.objective, 25.0);
        assert_eq!(eval.snapshot.input, (3.0, 4.0));
        assert_relative_eq!(eval.snapshot.output, 5.0);
    }

    #[test]
    fn problem_errors_are_reported_as_problem() {
        let result = evaluate(&Distance, &SquaredDistance, [-1.0, 4.0]);

        assert!(matches!(result, Err(EvalError::Problem(Negative))));
    }

    #[test]
    fn objective_matches_evaluate() {
        let value = objective(&Distance, &SquaredDistance, &[6.0, 8.0]).unwrap();

        assert_relative_eq!(value, 100.0);
    }
}
