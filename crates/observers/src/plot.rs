//! Plotting observer for visualizing solver progress.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use slope_core::Observer;
use slope_solvers::optimization::{gradient_descent, steepest_descent};

/// Window settings for [`PlotObserver::show`].
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Gradient descent").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    x_label: String,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Untitled, no legend, linear y-axis, x-axis labeled "Iteration".
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: "Iteration".to_owned(),
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Replaces the x-axis label, for traces recorded against something
    /// other than the iteration number.
    #[must_use]
    pub fn x_label(self, x_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            ..self
        }
    }

    /// Shows a legend with the trace names.
    #[must_use]
    pub fn legend(self) -> Self {
        Self {
            legend: true,
            ..self
        }
    }

    /// Plots log₁₀ of each y value, dropping points with `y <= 0`.
    ///
    /// Gradient norms and objective gaps shrink geometrically, so this is
    /// usually the readable scale for descent runs.
    #[must_use]
    pub fn log_y(self) -> Self {
        Self {
            log_y: true,
            ..self
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// The descent solver events implement `Plottable<2>` with the iteration
/// number on the x-axis and the traces `[objective, gradient norm]`. Implement
/// it on your own event types to plot other quantities.
///
/// # Example
///
/// ```ignore
/// impl Plottable<2> for MyEvent {
///     fn x(&self) -> Option<f64> {
///         Some(self.iteration as f64)
///     }
///
///     fn traces(&self) -> [Option<f64>; 2] {
///         [Some(self.objective), self.step]
///     }
/// }
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
impl<I, O, const N: usize> Plottable<2> for gradient_descent::Event<'_, I, O, N> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.objective), Some(self.gradient_norm)]
    }
}

#[allow(clippy::cast_precision_loss)]
impl<I, O, const N: usize> Plottable<2> for steepest_descent::Event<'_, I, O, N> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.objective), Some(self.gradient_norm)]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the solver observer. Works
///   for any event implementing [`Plottable<N>`][Plottable], including the
///   descent solver events.
/// - **Closure path**: wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] manually, choosing what to plot.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example: direct path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Objective", "Gradient norm"]);
/// gradient_descent::minimize(&objective, &objective, &[0.0, 0.0], &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Gradient descent").legend().log_y())?;
/// ```
///
/// # Example: closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Step"]);
///
/// steepest_descent::minimize(
///     &objective,
///     &objective,
///     &[0.0, 0.0],
///     &config,
///     |event: &steepest_descent::Event<'_, _, _, 2>| {
///         obs.record(event.iter as f64, [Some(event.step)]);
///         None
///     },
/// )?;
///
/// obs.show(ShowConfig::new().title("Line search steps"))?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a window with all recorded traces and blocks until it closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let ShowConfig {
            title,
            x_label,
            legend,
            log_y,
        } = config;
        let traces: Vec<(String, Vec<[f64; 2]>)> = self
            .names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| (name, scaled(&points, log_y)))
            .collect();
        let y_label = if log_y { "log₁₀" } else { "" };

        eframe::run_native(
            &title.unwrap_or_default(),
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    x_label,
                    y_label,
                    legend,
                }))
            }),
        )
    }
}

/// Maps recorded points onto the plotted y scale.
fn scaled(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if !log_y {
        return points.to_vec();
    }
    points
        .iter()
        .filter(|p| p[1] > 0.0)
        .map(|&[x, y]| [x, y.log10()])
        .collect()
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Renders traces that were already scaled by [`PlotObserver::show`].
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_label: String,
    y_label: &'static str,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("slope_plot")
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use slope_core::{FnObjective, Snapshot};

    fn bowl(x: &[f64; 2]) -> f64 {
        (x[0] - 1.0).powi(2) + 2.0 * (x[1] + 2.0).powi(2)
    }

    #[test]
    fn descent_event_maps_iteration_to_x_axis() {
        let snapshot = Snapshot::new([0.5, -1.0], 2.25);
        let event = gradient_descent::Event {
            iter: 3,
            x: [0.5, -1.0],
            objective: 2.25,
            previous_objective: 4.0,
            gradient: [-1.0, 4.0],
            gradient_norm: 17.0_f64.sqrt(),
            step: 0.5,
            outcome: gradient_descent::StepOutcome::Improved,
            snapshot: &snapshot,
        };

        assert_eq!(event.x(), Some(3.0));
        assert_eq!(event.traces(), [Some(2.25), Some(17.0_f64.sqrt())]);

        let mut obs = PlotObserver::<2>::new(["Objective", "Gradient norm"]);
        let action: Option<gradient_descent::Action> = obs.observe(&event);
        assert!(action.is_none());
        assert_eq!(obs.data[0], [[3.0, 2.25]]);
    }

    #[test]
    fn records_every_gradient_descent_iteration() {
        let objective = FnObjective::new(bowl);
        let mut obs = PlotObserver::<2>::new(["Objective", "Gradient norm"]);

        let solution = gradient_descent::minimize(
            &objective,
            &objective,
            &[0.0, 0.0],
            &gradient_descent::Config::default(),
            &mut obs,
        )
        .unwrap();

        let [objectives, gradient_norms] = &obs.data;
        assert_eq!(objectives.len(), solution.iters);
        assert_eq!(gradient_norms.len(), solution.iters);
        assert_eq!(objectives.last().map(|p| p[1]), Some(solution.objective));
        // The first unit step from the origin overshoots.
        assert!(objectives[0][1] > bowl(&[0.0, 0.0]));
    }

    #[test]
    fn collects_one_point_per_steepest_descent_iteration() {
        let objective = FnObjective::new(|x: &[f64; 2]| x[0] * x[0] + 3.0 * x[1] * x[1]);
        let mut obs = PlotObserver::<2>::new(["Objective", "Gradient norm"]);

        let solution = steepest_descent::minimize(
            &objective,
            &objective,
            &[1.0, 1.0],
            &steepest_descent::Config::default(),
            &mut obs,
        )
        .unwrap();

        let gradient_norms = &obs.data[1];
        assert_eq!(gradient_norms.len(), solution.iters);
        assert_eq!(gradient_norms[0][0], 1.0);
        assert_eq!(
            gradient_norms.last().map(|p| p[1]),
            Some(solution.gradient_norm)
        );
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let points = [[1.0, 100.0], [2.0, 0.0], [3.0, -1.0], [4.0, 0.001]];

        let log = scaled(&points, true);

        assert_eq!(log.len(), 2);
        assert_eq!(log[0][0], 1.0);
        assert_relative_eq!(log[0][1], 2.0, epsilon = 1e-12);
        assert_eq!(log[1][0], 4.0);
        assert_relative_eq!(log[1][1], -3.0, epsilon = 1e-12);
        assert_eq!(scaled(&points, false), points);
    }

    #[test]
    fn closure_path_skips_empty_slots() {
        let objective = FnObjective::new(bowl);
        let mut obs = PlotObserver::<2>::new(["Overshoots", "Step"]);

        gradient_descent::minimize(
            &objective,
            &objective,
            &[0.0, 0.0],
            &gradient_descent::Config::default(),
            |event: &gradient_descent::Event<'_, [f64; 2], f64, 2>| {
                let overshoot = (event.outcome == gradient_descent::StepOutcome::Overshot)
                    .then_some(event.objective);
                let iter = f64::from(u32::try_from(event.iter).unwrap());
                obs.record(iter, [overshoot, Some(event.step)]);
                None
            },
        )
        .unwrap();

        // Iterations 1 and 3 overshoot on this bowl.
        let overshoot_iters: Vec<f64> = obs.data[0].iter().map(|p| p[0]).collect();
        assert_eq!(overshoot_iters, [1.0, 3.0]);
        assert_eq!(obs.data[1][..4], [[1.0, 1.0], [2.0, 0.5], [3.0, 0.5], [4.0, 0.25]]);
    }
}
