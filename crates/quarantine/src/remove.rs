//! Outright deletion of unused media

use mediasweep_errors::{Error, StorageError};
use mediasweep_types::DisposedFile;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Delete every file in `paths`
///
/// # Errors
///
/// Stops at the first file that cannot be removed. Files deleted before
/// the failure stay deleted.
pub fn delete_media(paths: &[PathBuf]) -> Result<Vec<DisposedFile>, Error> {
    let mut deleted = Vec::with_capacity(paths.len());
    for path in paths {
        fs::remove_file(path).map_err(|e| StorageError::from_io_with_path(&e, path))?;
        debug!(path = %path.display(), "deleted unused media");
        deleted.push(DisposedFile {
            source: path.clone(),
            destination: None,
        });
    }
    Ok(deleted)
}
