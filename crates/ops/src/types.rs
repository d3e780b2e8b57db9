//! Types for operations and results

use mediasweep_types::Disposal;
use serde::{Deserialize, Serialize};

/// What a cleanup run should look at and do
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupRequest {
    /// Exclude patterns, prefix-anchored with `*` as the only wildcard
    pub exclude: Vec<String>,
    /// Restrict candidates to `MediaRoot/<model>` for these models
    pub include_models: Vec<String>,
    /// Detect only, touch nothing
    pub dry_run: bool,
    pub disposal: Disposal,
    /// Prune empty directories under the media root afterwards
    pub remove_empty_dirs: bool,
}

impl CleanupRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn include_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_models.extend(models.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    #[must_use]
    pub fn remove_empty_dirs(mut self, remove: bool) -> Self {
        self.remove_empty_dirs = remove;
        self
    }
}

/// A model and the file attributes it owns
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// `record_type.attribute` for every file attribute of the model
    pub attributes: Vec<String>,
}
