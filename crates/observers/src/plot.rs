//! Plotting observer for visualizing sampled trajectories.
//!
//! See [`PlotObserver`] and [`show_timeline`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Points};
use recoil_core::Observer;
use recoil_solvers::{
    timeline::{STEPS, Timeline},
    trajectory,
};
use uom::si::time::second;

/// Configuration for rendering a plot window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Scale").legend().target(1.0))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    target: Option<f64>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no target line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            target: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws a horizontal line at the value the run settles on.
    #[must_use]
    pub fn target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects every clock read of a sampling run.
///
/// Two traces are kept against elapsed seconds: the value at every read, and
/// the reads that were recorded as samples (repeats are skipped by the
/// sampler). Pass `&mut PlotObserver` as the observer so
/// [`show`](PlotObserver::show) can be called after the run completes.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::new();
/// trajectory::sample(&spring, endpoints, &config, &mut clock, &mut obs)?;
/// obs.show(ShowConfig::new().title("Scale").legend().target(endpoints.to))?;
/// ```
#[derive(Debug, Default)]
pub struct PlotObserver {
    reads: Vec<[f64; 2]>,
    recorded: Vec<[f64; 2]>,
}

impl PlotObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one clock read.
    pub fn record(&mut self, event: &trajectory::Event) {
        let point = [event.elapsed.get::<second>(), event.value];
        self.reads.push(point);
        if event.recorded.is_some() {
            self.recorded.push(point);
        }
    }

    /// Opens a blocking egui window displaying the collected reads.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let series = vec![
            Series::line("value", self.reads),
            Series::points("samples", self.recorded),
        ];
        run(series, config)
    }
}

impl<A> Observer<trajectory::Event, A> for PlotObserver {
    fn observe(&mut self, event: &trajectory::Event) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut PlotObserver` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<A> Observer<trajectory::Event, A> for &mut PlotObserver {
    fn observe(&mut self, event: &trajectory::Event) -> Option<A> {
        self.record(event);
        None
    }
}

/// Opens a blocking egui window showing a timeline's frames by percentage.
///
/// Percentages whose bucketed index lies past the last sample are skipped.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_timeline(timeline: &Timeline, config: ShowConfig) -> Result<(), eframe::Error> {
    let frames = timeline_points(timeline);
    run(vec![Series::line("frame", frames)], config)
}

#[allow(clippy::cast_precision_loss)]
fn timeline_points(timeline: &Timeline) -> Vec<[f64; 2]> {
    (0..=STEPS)
        .filter_map(|percent| {
            let value = match percent {
                0 => Some(timeline.first()),
                STEPS => Some(timeline.last()),
                _ => timeline.frame(percent),
            };
            value.map(|value| [percent as f64, value])
        })
        .collect()
}

enum Style {
    Line,
    Points,
}

struct Series {
    name: &'static str,
    style: Style,
    points: Vec<[f64; 2]>,
}

impl Series {
    fn line(name: &'static str, points: Vec<[f64; 2]>) -> Self {
        Self {
            name,
            style: Style::Line,
            points,
        }
    }

    fn points(name: &'static str, points: Vec<[f64; 2]>) -> Self {
        Self {
            name,
            style: Style::Points,
            points,
        }
    }
}

fn run(series: Vec<Series>, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlotApp {
                series,
                legend: config.legend,
                target: config.target,
            }))
        }),
    )
}

/// The egui [`eframe::App`] that renders collected series.
struct PlotApp {
    series: Vec<Series>,
    legend: bool,
    target: Option<f64>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points: PlotPoints = series.points.iter().copied().collect();
                    match series.style {
                        Style::Line => plot_ui.line(Line::new(points).name(series.name)),
                        Style::Points => {
                            plot_ui.points(Points::new(points).radius(2.0).name(series.name));
                        }
                    }
                }
                if let Some(target) = self.target {
                    plot_ui.hline(HLine::new(target).name("target"));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use recoil_solvers::trajectory::{Action, Samples};
    use recoil_solvers::timeline::StrideRule;
    use uom::si::f64::Time;

    fn event(t: f64, value: f64, recorded: Option<usize>) -> trajectory::Event {
        trajectory::Event {
            iter: 0,
            elapsed: Time::new::<second>(t),
            proportion: value,
            value,
            recorded,
            periods: 0,
        }
    }

    fn feed(obs: &mut PlotObserver, event: &trajectory::Event) {
        let _: Option<Action> = obs.observe(event);
    }

    #[test]
    fn keeps_every_read_but_only_recorded_samples() {
        let mut obs = PlotObserver::new();
        feed(&mut obs, &event(0.0, 1.0, Some(0)));
        feed(&mut obs, &event(0.5, 1.0, None));
        feed(&mut obs, &event(1.0, 2.0, Some(1)));

        assert_eq!(obs.reads, [[0.0, 1.0], [0.5, 1.0], [1.0, 2.0]]);
        assert_eq!(obs.recorded, [[0.0, 1.0], [1.0, 2.0]]);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = PlotObserver::new();
        let action: Option<Action> = obs.observe(&event(0.0, 0.0, Some(0)));
        assert!(action.is_none());
    }

    #[test]
    fn timeline_points_skip_missing_frames() {
        let samples = Samples::from_values(vec![0.0, 1.0, 2.0]).unwrap();
        let timeline = Timeline::new(samples, StrideRule::AtLeastOne);

        let points = timeline_points(&timeline);

        assert_eq!(points, [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [100.0, 2.0]]);
    }
}
