use thiserror::Error;

use crate::finite_diff::Perturbation;

/// Configuration for the Newton line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    perturbation: Perturbation,
    secant_step: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("secant_step must be finite and non-zero")]
    SecantStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            perturbation: Perturbation::default(),
            secant_step: 0.1,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a config with the given slope tolerance and default settings.
    ///
    /// The defaults are a perturbation of `1e-5`, a secant step of `0.1`,
    /// and at most 100 Newton updates.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Sets the perturbation used to estimate `g'(t)`.
    #[must_use]
    pub fn with_perturbation(self, perturbation: Perturbation) -> Self {
        Self {
            perturbation,
            ..self
        }
    }

    /// Sets the offset used for the secant estimate of `g''(t)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `secant_step` is zero or not finite.
    pub fn with_secant_step(self, secant_step: f64) -> Result<Self, ConfigError> {
        if secant_step == 0.0 || !secant_step.is_finite() {
            return Err(ConfigError::SecantStep);
        }
        Ok(Self {
            secant_step,
            ..self
        })
    }

    /// Sets the maximum number of Newton updates.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the slope tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the perturbation used to estimate `g'(t)`.
    #[must_use]
    pub fn perturbation(&self) -> Perturbation {
        self.perturbation
    }

    /// Returns the secant offset used to estimate `g''(t)`.
    #[must_use]
    pub fn secant_step(&self) -> f64 {
        self.secant_step
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
