//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch gradient descent, steepest descent, or a bare line
//! search.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events numbered by iteration
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasGradientNorm`]: events that carry the gradient norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use slope_core::Observer;
//! use slope_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! /// Stops once the gradient is flat enough, even if the solver's own
//! /// precision is tighter.
//! struct FlatEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for FlatEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use slope_solvers::optimization::{gradient_descent, line_search, steepest_descent};

/// An event tagged with its iteration number.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iter(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns the Euclidean norm of the gradient for this event.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- gradient_descent::Event ---

impl<I, O, const N: usize> HasIteration for gradient_descent::Event<'_, I, O, N> {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The objective at the trial point, which is the new iterate unless the
/// step overshot and was rolled back.
impl<I, O, const N: usize> HasObjective for gradient_descent::Event<'_, I, O, N> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<I, O, const N: usize> HasGradientNorm for gradient_descent::Event<'_, I, O, N> {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

// --- steepest_descent::Event ---

impl<I, O, const N: usize> HasIteration for steepest_descent::Event<'_, I, O, N> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<I, O, const N: usize> HasObjective for steepest_descent::Event<'_, I, O, N> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<I, O, const N: usize> HasGradientNorm for steepest_descent::Event<'_, I, O, N> {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

// --- line_search::Event ---

impl HasIteration for line_search::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for gradient_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for steepest_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for line_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
