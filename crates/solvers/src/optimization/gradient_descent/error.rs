use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::{EvalError, point::DimensionMismatch};

use super::ConfigError;

/// Errors that can occur during gradient descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("no convergence after {iters} iterations (gradient norm {gradient_norm})")]
    NonConvergence { iters: usize, gradient_norm: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
