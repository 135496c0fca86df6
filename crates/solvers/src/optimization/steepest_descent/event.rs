use slope_core::Snapshot;

/// Event emitted by the steepest descent solver after each outer iteration.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The new point, `x − step · direction`.
    pub x: [f64; N],

    /// The objective at `x`.
    pub objective: f64,

    /// The gradient norm at `x`.
    pub gradient_norm: f64,

    /// The unit direction searched along, taken from the previous gradient.
    pub direction: [f64; N],

    /// The step length found by the line search.
    pub step: f64,

    /// Newton updates performed by the line search.
    pub line_search_iters: usize,

    /// Model input and output at `x`.
    pub snapshot: &'a Snapshot<I, O>,
}
