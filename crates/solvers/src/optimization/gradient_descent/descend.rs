use slope_core::{Model, Observer, OptimizationProblem};

use crate::{
    finite_diff::gradient,
    optimization::evaluate::{Evaluation, evaluate, objective},
    vector::euclidean_norm,
};

use super::{Action, Config, Error, Event, Overshoot, Solution, StepOutcome, Status};

/// Core gradient descent loop, starting from an already validated point.
pub(super) fn descend<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let f = |x: &[f64; N]| objective(model, problem, x);

    let mut current = evaluate(model, problem, x)?;
    let mut step = config.initial_step();
    let mut gradient_norm = f64::NAN;

    for iter in 1..=config.max_iters() {
        let previous_objective = current.objective;
        let grad = gradient(&f, &current.x, config.perturbation())?;
        gradient_norm = euclidean_norm(&grad);

        let tentative: [f64; N] = std::array::from_fn(|i| current.x[i] - step * grad[i]);
        let trial = evaluate(model, problem, tentative)?;

        let outcome = if trial.objective < previous_objective {
            StepOutcome::Improved
        } else {
            StepOutcome::Overshot
        };
        let keep_trial = match outcome {
            StepOutcome::Improved => true,
            StepOutcome::Overshot => {
                config.overshoot() == Overshoot::Continue && trial.objective.is_finite()
            }
        };

        let event = Event {
            iter,
            x: if keep_trial { trial.x } else { current.x },
            objective: trial.objective,
            previous_objective,
            gradient: grad,
            gradient_norm,
            step,
            outcome,
            snapshot: &trial.snapshot,
        };
        let action = observer.observe(&event);

        if outcome == StepOutcome::Overshot {
            step /= 2.0;
        }
        if keep_trial {
            current = trial;
        }

        if let Some(Action::StopEarly) = action {
            return Ok(into_solution(
                current,
                Status::StoppedByObserver,
                gradient_norm,
                step,
                iter,
            ));
        }

        if gradient_norm <= config.precision() && outcome == StepOutcome::Improved {
            return Ok(into_solution(
                current,
                Status::Converged,
                gradient_norm,
                step,
                iter,
            ));
        }
    }

    Err(Error::NonConvergence {
        iters: config.max_iters(),
        gradient_norm,
    })
}

fn into_solution<I, O, const N: usize>(
    eval: Evaluation<I, O, N>,
    status: Status,
    gradient_norm: f64,
    step: f64,
    iters: usize,
) -> Solution<I, O, N> {
    Solution {
        status,
        x: eval.x,
        objective: eval.objective,
        gradient_norm,
        step,
        snapshot: eval.snapshot,
        iters,
    }
}
