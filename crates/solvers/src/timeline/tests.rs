use approx::assert_relative_eq;
use recoil_core::VirtualClock;

use crate::{
    spring::{self, Parameters},
    trajectory::{self, Config, Endpoints, Samples, Status},
};

use super::{Error, STEPS, StrideRule, Timeline, Track, sample_tracks};

fn ramp(len: usize) -> Samples {
    #[allow(clippy::cast_precision_loss)]
    let values = (0..len).map(|i| i as f64).collect();
    Samples::from_values(values).unwrap()
}

#[test]
fn hundred_samples_map_percent_to_index() {
    let timeline = Timeline::new(ramp(100), StrideRule::Nearest);

    assert_eq!(timeline.stride(), 1);
    for percent in 1..STEPS {
        #[allow(clippy::cast_precision_loss)]
        let expected = percent as f64;
        assert_eq!(timeline.frame(percent), Some(expected));
    }
}

#[test]
fn stride_rounds_to_nearest_hundred() {
    assert_eq!(StrideRule::Nearest.stride(49), 0);
    assert_eq!(StrideRule::Nearest.stride(50), 1);
    assert_eq!(StrideRule::Nearest.stride(149), 1);
    assert_eq!(StrideRule::Nearest.stride(150), 2);
    assert_eq!(StrideRule::Nearest.stride(1_320), 13);
}

#[test]
fn sparse_runs_repeat_the_first_sample_without_clamping() {
    let timeline = Timeline::new(ramp(30), StrideRule::Nearest);

    assert_eq!(timeline.stride(), 0);
    for percent in 1..STEPS {
        assert_eq!(timeline.frame(percent), Some(0.0));
    }
}

#[test]
fn clamped_sparse_runs_advance_then_run_out() {
    let timeline = Timeline::new(ramp(30), StrideRule::AtLeastOne);

    assert_eq!(timeline.stride(), 1);
    assert_eq!(timeline.frame(29), Some(29.0));
    assert_eq!(timeline.frame(30), None);
    assert_eq!(timeline.frame(99), None);
}

#[test]
fn default_rule_clamps() {
    assert_eq!(StrideRule::default(), StrideRule::AtLeastOne);
    assert_eq!(StrideRule::default().stride(1), 1);
}

#[test]
fn lookups_past_the_end_are_absent() {
    // Stride 2 reaches index 158 at 79% and runs out at 80%.
    let timeline = Timeline::new(ramp(160), StrideRule::Nearest);

    assert_eq!(timeline.stride(), 2);
    assert_eq!(timeline.frame(79), Some(158.0));
    assert_eq!(timeline.frame(80), None);
    assert_eq!(timeline.frame(usize::MAX), None);
}

#[test]
fn frames_follow_step_granularity() {
    let timeline = Timeline::new(ramp(100), StrideRule::default());

    let percents: Vec<usize> = timeline.frames(10).map(|(p, _)| p).collect();
    assert_eq!(percents, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

    assert_eq!(timeline.frames(1).count(), 99);
    assert_eq!(timeline.frames(0).count(), 0);
    assert_eq!(timeline.frames(100).count(), 0);
}

#[test]
fn endpoints_come_from_first_and_last_samples() {
    let timeline = Timeline::new(ramp(7), StrideRule::default());

    assert_eq!(timeline.first(), 0.0);
    assert_eq!(timeline.last(), 6.0);
}

fn scale_track() -> Track {
    Track::new(Endpoints::new(1.085, 1.0))
        .name("transform")
        .sub_name("scale")
        .parameters(Parameters::default().stiffness(381.47).damping(15.17))
}

fn shift_track() -> Track {
    Track::new(Endpoints::new(0.0, 40.0))
        .name("translateX")
        .suffix("px")
}

#[test]
fn composite_frames_preserve_track_order() {
    let tracks = [scale_track(), shift_track()];
    let config = Config::new(2, 5, 10_000).unwrap();

    let composite = sample_tracks(
        &tracks,
        &config,
        StrideRule::default(),
        &mut VirtualClock::default(),
    )
    .expect("should sample");

    assert_eq!(composite.len(), 2);
    assert_eq!(composite.tracks()[0].track, tracks[0]);
    assert_eq!(composite.tracks()[1].track, tracks[1]);

    for sampled in composite.tracks() {
        assert_eq!(sampled.status, Status::PeriodsReached);
    }

    // Each column is exactly what the track's own timeline reports.
    for percent in 1..STEPS {
        let frame = composite.frame(percent);
        assert_eq!(frame.len(), 2);
        for (column, sampled) in frame.iter().zip(composite.tracks()) {
            assert_eq!(*column, sampled.timeline.frame(percent));
        }
    }

    assert_relative_eq!(composite.first()[0], 1.085, epsilon = 1e-12);
    assert_relative_eq!(composite.first()[1], 0.0);
    assert_eq!(composite.last(), vec![1.0, 40.0]);
}

#[test]
fn tracks_match_independent_sampling() {
    let track = scale_track();
    let config = Config::default();

    let composite =
        sample_tracks(&[track.clone()], &config, StrideRule::Nearest, &mut VirtualClock::default())
            .unwrap();

    let spring = spring::Oscillator::new(track.parameters).unwrap();
    let solution = trajectory::sample_unobserved(
        &spring,
        track.endpoints,
        &config,
        &mut VirtualClock::default(),
    )
    .unwrap();

    assert_eq!(
        composite.tracks()[0].timeline,
        Timeline::new(solution.samples, StrideRule::Nearest)
    );
}

#[test]
fn track_config_overrides_shared_config() {
    let capped = Config::new(2, 3, 10).unwrap();
    let tracks = [shift_track().config(capped), shift_track()];

    let composite = sample_tracks(
        &tracks,
        &Config::default(),
        StrideRule::default(),
        &mut VirtualClock::default(),
    )
    .unwrap();

    assert_eq!(composite.tracks()[0].status, Status::IterationCeiling);
    assert_eq!(composite.tracks()[1].status, Status::PeriodsReached);
}

#[test]
fn failing_track_reports_its_index() {
    let tracks = [
        shift_track(),
        shift_track().parameters(Parameters::default().mass(0.0)),
    ];

    let error = sample_tracks(
        &tracks,
        &Config::default(),
        StrideRule::default(),
        &mut VirtualClock::default(),
    )
    .unwrap_err();

    assert_eq!(error.index(), 1);
    assert_eq!(
        error,
        Error::Spring {
            index: 1,
            source: spring::Error::Mass { value: 0.0 },
        }
    );

    let tracks = [Track::new(Endpoints::new(f64::NAN, 1.0))];
    let error = sample_tracks(
        &tracks,
        &Config::default(),
        StrideRule::default(),
        &mut VirtualClock::default(),
    )
    .unwrap_err();

    assert!(matches!(error, Error::Trajectory { index: 0, .. }));
}

#[test]
fn no_tracks_yield_empty_frames() {
    let composite = sample_tracks(
        &[],
        &Config::default(),
        StrideRule::default(),
        &mut VirtualClock::default(),
    )
    .unwrap();

    assert!(composite.is_empty());
    assert!(composite.frame(50).is_empty());
}
