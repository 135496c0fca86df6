use slope_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm met the precision on an improving step.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a gradient descent run.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The final point.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient norm from the last iteration's stopping test.
    pub gradient_norm: f64,

    /// The step length the next iteration would use.
    pub step: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of iterations performed.
    pub iters: usize,
}
