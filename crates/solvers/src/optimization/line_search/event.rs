/// Event emitted after each Newton update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The update number, starting at 1.
    pub iter: usize,

    /// The step after this update.
    pub step: f64,

    /// The estimated `g'(step)` after this update.
    pub slope: f64,

    /// The curvature estimate used for this update.
    pub curvature: f64,
}
