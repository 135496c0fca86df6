use slope_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm dropped below the precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a steepest descent run.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The final point.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient norm at `x`.
    pub gradient_norm: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of outer iterations performed.
    pub iters: usize,
}
