use thiserror::Error;

use crate::{finite_diff::Perturbation, optimization::line_search};

/// Configuration for the steepest descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
    perturbation: Perturbation,
    line_search: line_search::Config,
    max_iters: usize,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and positive")]
    Precision,

    #[error("invalid line search config: {0}")]
    LineSearch(#[from] line_search::ConfigError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 1e-3,
            perturbation: Perturbation::default(),
            line_search: line_search::Config::default(),
            max_iters: 1_000,
        }
    }
}

impl Config {
    /// Creates a config with the given gradient-norm precision.
    ///
    /// The line search stops once its slope is within the same `precision`.
    /// The other defaults are a perturbation of `1e-5` and at most 1 000
    /// outer iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive.
    pub fn new(precision: f64) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::Precision);
        }
        Ok(Self {
            precision,
            line_search: line_search::Config::new(precision)?,
            ..Self::default()
        })
    }

    /// Sets the finite-difference perturbation for gradients.
    #[must_use]
    pub fn with_perturbation(self, perturbation: Perturbation) -> Self {
        Self {
            perturbation,
            ..self
        }
    }

    /// Replaces the line search config.
    #[must_use]
    pub fn with_line_search(self, line_search: line_search::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Sets the maximum number of outer iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the gradient-norm precision.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the finite-difference perturbation.
    #[must_use]
    pub fn perturbation(&self) -> Perturbation {
        self.perturbation
    }

    /// Returns the line search config.
    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
