//! Plots a scale spring sampled with a virtual clock, then its timeline.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run -p recoil-observers --example plot --features plot
//! ```

use std::time::Duration;

use recoil_core::VirtualClock;
use recoil_observers::{
    Deadline,
    plot::{PlotObserver, ShowConfig, show_timeline},
};
use recoil_solvers::{
    spring::{Oscillator, Parameters},
    timeline::{StrideRule, Timeline},
    trajectory::{self, Action, Config, Endpoints, Event},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let spring = Oscillator::new(Parameters::default().stiffness(381.47).damping(15.17))?;
    let endpoints = Endpoints::new(1.085, 1.0);
    let config = Config::new(5, 5, 10_000)?;

    let mut plot = PlotObserver::new();
    let mut deadline = Deadline::new(Duration::from_secs(1));

    let solution = trajectory::sample(
        &spring,
        endpoints,
        &config,
        &mut VirtualClock::default(),
        |event: &Event| {
            recoil_core::Observer::<Event, Action>::observe(&mut plot, event);
            recoil_core::Observer::<Event, Action>::observe(&mut deadline, event)
        },
    )?;

    log::info!(
        "{:?}: {} samples from {} reads",
        solution.status,
        solution.samples.len(),
        solution.iters
    );

    let timeline = Timeline::new(solution.samples, StrideRule::default());

    plot.show(
        ShowConfig::new()
            .title("Spring trajectory")
            .legend()
            .target(endpoints.to),
    )?;
    show_timeline(
        &timeline,
        ShowConfig::new().title("Timeline frames").target(endpoints.to),
    )?;

    Ok(())
}
