/// Actions an observer can take during the line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and accept the current step.
    StopEarly,
}
