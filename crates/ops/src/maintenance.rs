//! Cleanup and quarantine retention operations

use crate::context::retention_sweeper;
use crate::{query, CleanupRequest, OpsCtx};
use chrono::NaiveDateTime;
use mediasweep_config::Config;
use mediasweep_errors::Error;
use mediasweep_quarantine::{delete_media, prune_empty_dirs};
use mediasweep_types::{CleanupOutcome, CleanupReport, Disposal, SweepReport};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Detect unused media and dispose of it
///
/// Include models are validated before the filesystem is touched. When
/// nothing is unused, or `request.dry_run` is set, the report is returned
/// without any mutation. Otherwise `confirm` is asked with the unused list
/// and a `false` answer stops the run with [`CleanupOutcome::Interrupted`].
///
/// # Errors
///
/// Returns an error if validation or detection fails, if `confirm` fails,
/// or if a file cannot be moved or deleted. Files disposed of before a
/// failure stay where they were put.
pub fn cleanup<F>(ctx: &OpsCtx, request: &CleanupRequest, confirm: F) -> Result<CleanupReport, Error>
where
    F: FnOnce(&[PathBuf]) -> Result<bool, Error>,
{
    let start = Instant::now();

    query::validate_include_models(ctx, &request.include_models)?;
    let unused = query::find_unused(ctx, request)?;

    if unused.is_empty() {
        return Ok(CleanupReport::stopped(
            CleanupOutcome::NothingToDo,
            request.disposal,
            unused,
        ));
    }

    if request.dry_run {
        info!(files = unused.len(), "dry run, nothing disposed of");
        return Ok(CleanupReport::stopped(
            CleanupOutcome::DryRun,
            request.disposal,
            unused,
        ));
    }

    if !confirm(&unused)? {
        info!(files = unused.len(), "cleanup declined");
        return Ok(CleanupReport::stopped(
            CleanupOutcome::Interrupted,
            request.disposal,
            unused,
        ));
    }

    let (bucket, disposed) = match request.disposal {
        Disposal::Quarantine => {
            let (bucket, moved) = ctx.mover().quarantine(&unused)?;
            (Some(bucket), moved)
        }
        Disposal::Delete => (None, delete_media(&unused)?),
    };

    let pruned_root = request.remove_empty_dirs && prune_empty_dirs(ctx.root.path());

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        disposal = %request.disposal,
        files = disposed.len(),
        duration_ms,
        "cleanup completed"
    );

    Ok(CleanupReport {
        outcome: CleanupOutcome::Completed,
        disposal: request.disposal,
        unused,
        disposed,
        bucket,
        pruned_root,
        duration_ms,
    })
}

/// Purge quarantine buckets older than the configured retention window
///
/// # Errors
///
/// Returns an error if the media root is not configured or the quarantine
/// directory name is invalid. Buckets that cannot be removed are reported,
/// not returned as errors.
pub fn sweep(config: &Config, now: NaiveDateTime, dry_run: bool) -> Result<SweepReport, Error> {
    let report = retention_sweeper(config)?.sweep(now, dry_run);
    info!(
        removed = report.removed.len(),
        retained = report.retained.len(),
        failed = report.failed.len(),
        dry_run,
        "quarantine sweep completed"
    );
    Ok(report)
}
