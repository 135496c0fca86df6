//! Reusable observers for the slope solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the gradient descent, steepest descent, and line search
//! solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`HasGradientNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: logs each iteration through `tracing`
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] for visualizing solver behavior via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: slope_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
