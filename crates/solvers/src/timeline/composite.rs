use recoil_core::Clock;

use crate::{
    spring::Oscillator,
    trajectory::{self, Config, Status},
};

use super::{Error, StrideRule, Timeline, Track, percentages};

/// A track together with the outcome of sampling it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTrack {
    pub track: Track,

    /// How sampling this track terminated.
    pub status: Status,

    /// Exact target hits counted for this track.
    pub periods: usize,

    pub timeline: Timeline,
}

/// Several independently sampled tracks sharing one percentage timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    tracks: Vec<SampledTrack>,
}

impl Composite {
    /// Returns the sampled tracks in input order.
    #[must_use]
    pub fn tracks(&self) -> &[SampledTrack] {
        &self.tracks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns each track's frame at `percent`, in input order.
    #[must_use]
    pub fn frame(&self, percent: usize) -> Vec<Option<f64>> {
        self.tracks
            .iter()
            .map(|sampled| sampled.timeline.frame(percent))
            .collect()
    }

    /// Iterates over the interior percentages divisible by `every`, paired
    /// with the composite frame at each.
    pub fn frames(&self, every: usize) -> impl Iterator<Item = (usize, Vec<Option<f64>>)> + '_ {
        percentages(every).map(|percent| (percent, self.frame(percent)))
    }

    /// Returns each track's starting value.
    #[must_use]
    pub fn first(&self) -> Vec<f64> {
        self.tracks.iter().map(|s| s.timeline.first()).collect()
    }

    /// Returns each track's last recorded value.
    #[must_use]
    pub fn last(&self) -> Vec<f64> {
        self.tracks.iter().map(|s| s.timeline.last()).collect()
    }
}

/// Samples every track independently and buckets each onto the timeline.
///
/// Tracks are sampled in order with the same clock, which is restarted for
/// each track. A track's own [`Config`] takes precedence over `config`.
///
/// # Errors
///
/// Returns the first failure, tagged with the index of the failing track.
pub fn sample_tracks<K>(
    tracks: &[Track],
    config: &Config,
    rule: StrideRule,
    clock: &mut K,
) -> Result<Composite, Error>
where
    K: Clock + ?Sized,
{
    let mut sampled = Vec::with_capacity(tracks.len());

    for (index, track) in tracks.iter().enumerate() {
        let spring = Oscillator::new(track.parameters)
            .map_err(|source| Error::Spring { index, source })?;
        let config = track.config.as_ref().unwrap_or(config);

        let solution = trajectory::sample_unobserved(&spring, track.endpoints, config, clock)
            .map_err(|source| Error::Trajectory { index, source })?;

        log::debug!(
            "track {index} ({}): {} samples, {:?} after {} iterations",
            track.name.as_deref().unwrap_or("unnamed"),
            solution.samples.len(),
            solution.status,
            solution.iters
        );

        sampled.push(SampledTrack {
            track: track.clone(),
            status: solution.status,
            periods: solution.periods,
            timeline: Timeline::new(solution.samples, rule),
        });
    }

    Ok(Composite { tracks: sampled })
}
