//! Run settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_REPOSITORY: &str = "repository.ser";

/// Settings for a [`WordTracker`][crate::tracker::WordTracker] run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Where the word index is loaded from and saved to.
    pub repository: PathBuf,
    /// Whether ingested words are written back to the repository.
    pub persist: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            repository: PathBuf::from(DEFAULT_REPOSITORY),
            persist: true,
        }
    }
}

impl TrackerConfig {
    /// Use a different snapshot file.
    pub fn with_repository(mut self, repository: impl Into<PathBuf>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Turn saving on or off.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
