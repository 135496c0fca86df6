/// A callable model that maps an input to an output.
///
/// Solvers never call a model directly with solver variables. An
/// [`OptimizationProblem`](crate::OptimizationProblem) first builds the model
/// input from `x`, then extracts the objective from the input and output.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Square;

    impl Model for Square {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &[f64; 2]) -> Result<f64, Infallible> {
            Ok(input[0] * input[0] + input[1] * input[1])
        }
    }

    #[test]
    fn snapshot_captures_call() {
        let input = [3.0, 4.0];
        let output = Square.call(&input).unwrap();
        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, [3.0, 4.0]);
        assert_eq!(snapshot.output, 25.0);
    }
}
