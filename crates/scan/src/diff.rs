//! Present minus referenced

use crate::{FilesystemScanner, ReferenceScanner};
use mediasweep_errors::Error;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

/// Every path in `present` that no record references, keeping walk order
#[must_use]
pub fn unused(present: Vec<PathBuf>, referenced: &HashSet<PathBuf>) -> Vec<PathBuf> {
    present
        .into_iter()
        .filter(|path| !referenced.contains(path))
        .collect()
}

/// Run both scans and return the unused media
///
/// The quarantine directory is always added to `exclude`, whether or not
/// the caller already listed it.
///
/// # Errors
///
/// Returns an error if either scan fails.
pub fn find_unused(
    filesystem: &FilesystemScanner,
    references: &ReferenceScanner<'_>,
    exclude: &[String],
    include_models: &[String],
) -> Result<Vec<PathBuf>, Error> {
    let mut exclude = exclude.to_vec();
    exclude.push(filesystem.quarantine_dir().to_string());

    let present = filesystem.scan_present(&exclude, include_models)?;
    let referenced = references.scan_referenced()?;
    let present_count = present.len();

    let unused = unused(present, &referenced);
    info!(
        present = present_count,
        referenced = referenced.len(),
        unused = unused.len(),
        "unused media detection complete"
    );
    Ok(unused)
}
