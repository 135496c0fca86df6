use thiserror::Error;

use crate::finite_diff::Perturbation;

/// What to do with the iterate after a step that failed to decrease the
/// objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overshoot {
    /// Keep the overshot point and continue from it with the halved step.
    ///
    /// A trial point whose objective is NaN or infinite is never kept.
    #[default]
    Continue,

    /// Roll back to the point before the step and retry with the halved step.
    Restore,
}

/// Configuration for the gradient descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
    initial_step: f64,
    perturbation: Perturbation,
    overshoot: Overshoot,
    max_iters: usize,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and positive")]
    Precision,

    #[error("initial_step must be finite and positive")]
    InitialStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 1e-3,
            initial_step: 1.0,
            perturbation: Perturbation::default(),
            overshoot: Overshoot::Continue,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Creates a config with the given gradient-norm precision.
    ///
    /// The defaults are an initial step of `1.0`, a perturbation of `1e-5`,
    /// [`Overshoot::Continue`], and at most 10 000 iterations.
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
            ..Self::default()
        })
    }

    /// Sets the step length used for the first iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive.
    pub fn with_initial_step(self, initial_step: f64) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        Ok(Self {
            initial_step,
            ..self
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

    /// Sets the overshoot policy.
    #[must_use]
    pub fn with_overshoot(self, overshoot: Overshoot) -> Self {
        Self { overshoot, ..self }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the gradient-norm precision.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the step length used for the first iteration.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the finite-difference perturbation.
    #[must_use]
    pub fn perturbation(&self) -> Perturbation {
        self.perturbation
    }

    /// Returns the overshoot policy.
    #[must_use]
    pub fn overshoot(&self) -> Overshoot {
        self.overshoot
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
