use slope_core::Snapshot;

/// Whether a tentative step decreased the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The objective decreased.
    Improved,

    /// The objective did not decrease; the step length was halved.
    Overshot,
}

/// Event emitted by the gradient descent solver after each iteration.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The iterate after this iteration.
    ///
    /// After an overshoot with [`Overshoot::Restore`](super::Overshoot::Restore)
    /// this is the pre-step point.
    pub x: [f64; N],

    /// The objective at the tentative point.
    pub objective: f64,

    /// The objective at the pre-step point.
    pub previous_objective: f64,

    /// The gradient at the pre-step point.
    pub gradient: [f64; N],

    /// The Euclidean norm of `gradient`.
    pub gradient_norm: f64,

    /// The step length used for the tentative step.
    pub step: f64,

    /// Whether the tentative step improved the objective.
    pub outcome: StepOutcome,

    /// Model input and output at the tentative point.
    pub snapshot: &'a Snapshot<I, O>,
}
