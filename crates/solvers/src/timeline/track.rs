#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    spring::Parameters,
    trajectory::{Config, Endpoints},
};

/// One independently animated value on a shared timeline.
///
/// `name`, `sub_name`, and `suffix` are carried through untouched for
/// whatever formats the frames, e.g. `transform`, `scale`, and `px`.
/// When `config` is set it replaces the shared sampler config for this track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    pub name: Option<String>,
    pub sub_name: Option<String>,
    pub suffix: Option<String>,
    pub endpoints: Endpoints,
    pub parameters: Parameters,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub config: Option<Config>,
}

impl Track {
    /// Creates an unnamed track with default spring parameters.
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            name: None,
            sub_name: None,
            suffix: None,
            endpoints,
            parameters: Parameters::default(),
            config: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn sub_name(mut self, sub_name: impl Into<String>) -> Self {
        self.sub_name = Some(sub_name.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}
