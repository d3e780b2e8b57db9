//! Report type definitions for operations

use crate::{CaptureBucket, Disposal};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a cleanup run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupOutcome {
    /// No unused media was found
    NothingToDo,
    /// Detection ran, nothing was touched
    DryRun,
    /// The operator declined the confirmation prompt
    Interrupted,
    /// Unused media was disposed of
    Completed,
}

/// A file removed from its original location by a cleanup run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposedFile {
    /// Absolute path the file was found at
    pub source: PathBuf,
    /// Where it was moved to; `None` when it was deleted
    pub destination: Option<PathBuf>,
}

/// Cleanup report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CleanupReport {
    pub outcome: CleanupOutcome,
    pub disposal: Disposal,
    /// Unused media in filesystem walk order
    pub unused: Vec<PathBuf>,
    /// Files actually moved or deleted
    pub disposed: Vec<DisposedFile>,
    /// Quarantine bucket shared by every moved file
    pub bucket: Option<CaptureBucket>,
    /// Whether empty-directory pruning removed the media root itself
    pub pruned_root: bool,
    pub duration_ms: u64,
}

impl CleanupReport {
    /// Report for a run that stopped before disposing of anything
    #[must_use]
    pub fn stopped(outcome: CleanupOutcome, disposal: Disposal, unused: Vec<PathBuf>) -> Self {
        Self {
            outcome,
            disposal,
            unused,
            disposed: Vec::new(),
            bucket: None,
            pruned_root: false,
            duration_ms: 0,
        }
    }
}

/// Retention sweep report
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SweepReport {
    /// Buckets older than the retention window that were deleted
    pub removed: Vec<CaptureBucket>,
    /// Buckets still inside the retention window
    pub retained: Vec<CaptureBucket>,
    /// Entries that are not capture buckets and were left alone
    pub skipped: Vec<String>,
    /// Expired buckets whose deletion failed
    pub failed: Vec<CaptureBucket>,
    pub dry_run: bool,
}
