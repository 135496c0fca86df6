use std::error::Error as StdError;

/// Errors that can occur during the line search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line search did not converge after {iters} iterations (step {step}, slope {slope})")]
    NotConverged { iters: usize, step: f64, slope: f64 },

    #[error("line search diverged after {iters} iterations at step {step}")]
    Diverged { iters: usize, step: f64 },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
