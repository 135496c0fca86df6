//! Structured logging of solver progress through `tracing`.

use slope_core::Observer;
use tracing::info;

use crate::traits::{HasGradientNorm, HasIteration, HasObjective};

/// An observer that logs every iteration as a `tracing` event.
///
/// Each event is emitted at `INFO` level with the fields `solver`, `iter`,
/// `objective`, and `gradient_norm`. Install any `tracing` subscriber to see
/// them. The observer never returns an action.
///
/// # Example
///
/// ```
/// use slope_core::FnObjective;
/// use slope_observers::TraceObserver;
/// use slope_solvers::optimization::steepest_descent;
///
/// let objective = FnObjective::new(|x: &[f64; 2]| x[0] * x[0] + 3.0 * x[1] * x[1]);
/// let mut trace = TraceObserver::new("steepest_descent");
///
/// let solution = steepest_descent::minimize(
///     &objective,
///     &objective,
///     &[1.0, 1.0],
///     &steepest_descent::Config::default(),
///     &mut trace,
/// )
/// .unwrap();
///
/// assert_eq!(trace.events(), solution.iters);
/// ```
#[derive(Debug, Clone)]
pub struct TraceObserver {
    solver: &'static str,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its log lines with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver, events: 0 }
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasObjective + HasGradientNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        info!(
            solver = self.solver,
            iter = event.iter(),
            objective = event.objective(),
            gradient_norm = event.gradient_norm(),
            "iteration"
        );
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to solvers that take an observer
/// by value, so the event count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIteration + HasObjective + HasGradientNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event {
        iter: usize,
        objective: f64,
        gradient_norm: f64,
    }

    impl HasIteration for Event {
        fn iter(&self) -> usize {
            self.iter
        }
    }

    impl HasObjective for Event {
        fn objective(&self) -> f64 {
            self.objective
        }
    }

    impl HasGradientNorm for Event {
        fn gradient_norm(&self) -> f64 {
            self.gradient_norm
        }
    }

    fn event(iter: usize) -> Event {
        Event {
            iter,
            objective: 1.0 / iter as f64,
            gradient_norm: 0.5,
        }
    }

    #[test]
    fn never_returns_an_action() {
        let mut trace = TraceObserver::new("test");

        let action: Option<()> = trace.observe(&event(1));

        assert!(action.is_none());
    }

    #[test]
    fn counts_every_event() {
        let mut trace = TraceObserver::new("test");

        for iter in 1..=3 {
            let _: Option<()> = trace.observe(&event(iter));
        }

        assert_eq!(trace.events(), 3);
    }
}
