/// Indicates how the line search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The slope dropped within tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The step `t*` along the searched direction.
    pub step: f64,

    /// The estimated `g'(t*)`.
    pub slope: f64,

    /// Number of Newton updates performed.
    pub iters: usize,
}
