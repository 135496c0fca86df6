//! Core traits and types for the slope solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OptimizationProblem`]: adapts solver variables to model inputs and
//!   extracts a scalar objective from model outputs
//! - [`FnObjective`]: wraps a plain closure so it can act as both model and
//!   problem

mod model;
mod objective;
mod observer;
mod problem;

pub use objective::FnObjective;
pub use observer::Observer;
pub use problem::OptimizationProblem;
pub use {model::Model, model::Snapshot};
