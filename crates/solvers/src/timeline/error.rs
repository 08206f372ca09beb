use thiserror::Error;

use crate::{spring, trajectory};

/// Errors that can occur while sampling tracks.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("track {index}: invalid spring parameters")]
    Spring {
        index: usize,
        #[source]
        source: spring::Error,
    },

    #[error("track {index}: sampling failed")]
    Trajectory {
        index: usize,
        #[source]
        source: trajectory::Error,
    },
}

impl Error {
    /// Returns the index of the track that failed.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Spring { index, .. } | Self::Trajectory { index, .. } => *index,
        }
    }
}
