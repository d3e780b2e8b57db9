//! Retention sweep over quarantine buckets

use chrono::{NaiveDateTime, TimeDelta};
use mediasweep_types::{CaptureBucket, SweepReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Deletes quarantine buckets older than the retention window
#[derive(Debug, Clone)]
pub struct RetentionSweeper {
    quarantine_root: PathBuf,
    retention: TimeDelta,
}

impl RetentionSweeper {
    #[must_use]
    pub fn new(quarantine_root: impl Into<PathBuf>, retention: TimeDelta) -> Self {
        Self {
            quarantine_root: quarantine_root.into(),
            retention,
        }
    }

    #[must_use]
    pub fn quarantine_root(&self) -> &Path {
        &self.quarantine_root
    }

    /// Delete every bucket captured more than the retention window before
    /// `now`.
    ///
    /// Only immediate child directories whose name parses as a bucket are
    /// considered; anything else is left alone. Deletion is best-effort: a
    /// bucket that cannot be removed is logged and recorded in
    /// `SweepReport::failed`, and the sweep continues.
    #[must_use]
    pub fn sweep(&self, now: NaiveDateTime, dry_run: bool) -> SweepReport {
        let mut report = SweepReport {
            dry_run,
            ..SweepReport::default()
        };

        let entries = match fs::read_dir(&self.quarantine_root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    path = %self.quarantine_root.display(),
                    error = %e,
                    "no quarantine directory to sweep"
                );
                return report;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            let bucket = match CaptureBucket::parse(&name) {
                Some(bucket) if is_dir => bucket,
                _ => {
                    report.skipped.push(name);
                    continue;
                }
            };

            if !bucket.is_expired(now, self.retention) {
                report.retained.push(bucket);
                continue;
            }

            if dry_run {
                report.removed.push(bucket);
                continue;
            }

            match fs::remove_dir_all(entry.path()) {
                Ok(()) => {
                    info!(bucket = %bucket, "removed expired quarantine bucket");
                    report.removed.push(bucket);
                }
                Err(e) => {
                    warn!(bucket = %bucket, error = %e, "failed to remove quarantine bucket");
                    report.failed.push(bucket);
                }
            }
        }

        report.removed.sort();
        report.retained.sort();
        report.skipped.sort();
        report
    }
}
