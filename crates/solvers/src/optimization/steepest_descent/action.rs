/// Actions an observer can take during steepest descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current point.
    StopEarly,
}
