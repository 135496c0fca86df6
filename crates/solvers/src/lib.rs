//! Numerical solvers for unconstrained minimization.
//!
//! # Modules
//!
//! - [`finite_diff`]: forward-difference derivatives and gradients
//! - [`vector`]: Euclidean norm and unit directions
//! - [`optimization`]: line search, gradient descent, and steepest descent

pub mod finite_diff;
pub mod optimization;
pub mod vector;
