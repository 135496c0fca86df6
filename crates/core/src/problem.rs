/// Defines a minimization problem to be solved.
///
/// A problem maps solver variables to a model input, then computes an
/// objective value from the model input and output. Solvers search for the
/// `x` that minimizes the objective.
///
/// The const generic `N` is the number of solver variables. Points,
/// gradients, and search directions inside a solver are all `[f64; N]`, so
/// their dimensions always agree.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// Solvers search for the input that minimizes this objective.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
