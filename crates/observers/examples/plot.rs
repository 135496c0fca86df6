//! Interactive visualizations of the slope solvers.
//!
//! Each mode minimizes f(x, y, z) = x³ + y² + 2z² − yz − y from the origin and
//! opens an interactive plot window showing how the solver progressed.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- gradient
//! cargo run --example plot --features plot -- steepest
//! cargo run --example plot --features plot -- compare 1e-6
//! ```
//!
//! # Modes
//!
//! - **gradient**: gradient descent. Shows the objective gap to the minimum
//!   and the gradient norm; the first iterations overshoot and halve the step.
//!
//! - **steepest**: steepest descent. Same traces; each iteration is a full
//!   line search, so far fewer iterations are needed.
//!
//! - **compare [precision]**: the gradient norm of both solvers on one plot.
//!   Defaults to a precision of `1e-3`; try `1e-6` to stretch the runs.

use std::error::Error;

use slope_core::FnObjective;
use slope_observers::{PlotObserver, ShowConfig};
use slope_solvers::optimization::{gradient_descent, steepest_descent};

/// The objective's value at its stationary point (0, 4/7, 1/7).
const MINIMUM: f64 = -2.0 / 7.0;

fn cubic(x: &[f64; 3]) -> f64 {
    x[0].powi(3) + x[1].powi(2) + 2.0 * x[2].powi(2) - x[1] * x[2] - x[1]
}

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "gradient".into());
    match mode.as_str() {
        "gradient" => gradient(),
        "steepest" => steepest(),
        "compare" => {
            let precision = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid precision, expected a number such as 1e-6");
                    std::process::exit(1);
                })
                .unwrap_or(1e-3);
            compare(precision)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [gradient|steepest|compare [precision]]");
            std::process::exit(1);
        }
    }
}

/// Plot gradient descent on a log scale.
///
/// The objective trace is the gap `f(x) − f*`, which stays positive once the
/// solver settles near the minimum.
fn gradient() -> Result<(), Box<dyn Error>> {
    let objective = FnObjective::new(cubic);
    let mut obs = PlotObserver::<2>::new(["f(x) − f*", "Gradient norm"]);

    gradient_descent::minimize(
        &objective,
        &objective,
        &[0.0, 0.0, 0.0],
        &gradient_descent::Config::default(),
        |event: &gradient_descent::Event<'_, [f64; 3], f64, 3>| {
            #[allow(clippy::cast_precision_loss)]
            let iter = event.iter as f64;
            obs.record(
                iter,
                [Some(event.objective - MINIMUM), Some(event.gradient_norm)],
            );
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("Gradient descent from the origin (log₁₀ scale)")
            .legend()
            .log_y(),
    )?;

    Ok(())
}

/// Plot steepest descent on a log scale.
fn steepest() -> Result<(), Box<dyn Error>> {
    let objective = FnObjective::new(cubic);
    let mut obs = PlotObserver::<2>::new(["f(x) − f*", "Gradient norm"]);

    steepest_descent::minimize(
        &objective,
        &objective,
        &[0.0, 0.0, 0.0],
        &steepest_descent::Config::default(),
        |event: &steepest_descent::Event<'_, [f64; 3], f64, 3>| {
            #[allow(clippy::cast_precision_loss)]
            let iter = event.iter as f64;
            obs.record(
                iter,
                [Some(event.objective - MINIMUM), Some(event.gradient_norm)],
            );
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("Steepest descent from the origin (log₁₀ scale)")
            .legend()
            .log_y(),
    )?;

    Ok(())
}

/// Overlay the gradient norm of both solvers.
fn compare(precision: f64) -> Result<(), Box<dyn Error>> {
    let objective = FnObjective::new(cubic);
    let mut obs = PlotObserver::<2>::new(["Gradient descent", "Steepest descent"]);

    gradient_descent::minimize(
        &objective,
        &objective,
        &[0.0, 0.0, 0.0],
        &gradient_descent::Config::new(precision)?,
        |event: &gradient_descent::Event<'_, [f64; 3], f64, 3>| {
            #[allow(clippy::cast_precision_loss)]
            let iter = event.iter as f64;
            obs.record(iter, [Some(event.gradient_norm), None]);
            None
        },
    )?;

    steepest_descent::minimize(
        &objective,
        &objective,
        &[0.0, 0.0, 0.0],
        &steepest_descent::Config::new(precision)?,
        |event: &steepest_descent::Event<'_, [f64; 3], f64, 3>| {
            #[allow(clippy::cast_precision_loss)]
            let iter = event.iter as f64;
            obs.record(iter, [None, Some(event.gradient_norm)]);
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!("Gradient norm at precision {precision} (log₁₀ scale)"))
            .legend()
            .log_y(),
    )?;

    Ok(())
}
