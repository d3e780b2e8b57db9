//! Removal of directories left empty after a cleanup

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Recursively remove empty directories below and including `path`.
///
/// Returns true only when `path` itself was removed. Files are never
/// removed, so a directory holding a file anywhere below it survives along
/// with all of its ancestors. Symlinks are treated like files.
pub fn prune_empty_dirs(path: &Path) -> bool {
    let is_dir = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_dir())
        .unwrap_or(false);
    if !is_dir {
        return false;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot list directory, keeping it");
            return false;
        }
    };

    // Every child is visited even after one is kept
    let mut all_removed = true;
    for entry in entries {
        match entry {
            Ok(entry) => all_removed &= prune_empty_dirs(&entry.path()),
            Err(_) => all_removed = false,
        }
    }

    if !all_removed {
        return false;
    }

    match fs::remove_dir(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed empty directory");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to remove empty directory");
            false
        }
    }
}
