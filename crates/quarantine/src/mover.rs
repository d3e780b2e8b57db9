//! Relocation of unused media into quarantine buckets

use mediasweep_config::MediaRoot;
use mediasweep_errors::{Error, StorageError};
use mediasweep_types::{CaptureBucket, DisposedFile};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Moves files from the media tree into `MediaRoot/<quarantine_dir>/<bucket>/`
#[derive(Debug, Clone)]
pub struct QuarantineMover {
    root: MediaRoot,
    quarantine_dir: String,
}

impl QuarantineMover {
    pub fn new(root: MediaRoot, quarantine_dir: impl Into<String>) -> Self {
        Self {
            root,
            quarantine_dir: quarantine_dir.into(),
        }
    }

    /// Directory holding every bucket
    #[must_use]
    pub fn quarantine_root(&self) -> PathBuf {
        self.root.quarantine_dir(&self.quarantine_dir)
    }

    /// Directory of one bucket
    #[must_use]
    pub fn bucket_dir(&self, bucket: &CaptureBucket) -> PathBuf {
        self.quarantine_root().join(bucket.dir_name())
    }

    /// Move every path into a bucket named after the current minute
    ///
    /// # Errors
    ///
    /// See [`QuarantineMover::quarantine_into`].
    pub fn quarantine(&self, paths: &[PathBuf]) -> Result<(CaptureBucket, Vec<DisposedFile>), Error> {
        let bucket = CaptureBucket::now();
        let moved = self.quarantine_into(paths, &bucket)?;
        Ok((bucket, moved))
    }

    /// Move every path into `bucket`, keeping its path relative to the
    /// media root
    ///
    /// # Errors
    ///
    /// Stops at the first file that is outside the media root or cannot be
    /// moved (for example because it vanished after the scan). Files moved
    /// before the failure stay in quarantine.
    pub fn quarantine_into(
        &self,
        paths: &[PathBuf],
        bucket: &CaptureBucket,
    ) -> Result<Vec<DisposedFile>, Error> {
        let mut moved = Vec::with_capacity(paths.len());

        for path in paths {
            let destination = self.destination(path, bucket)?;

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io_with_path(&e, parent))?;
            }

            move_file(path, &destination)?;
            debug!(
                from = %path.display(),
                to = %destination.display(),
                "placed file in quarantine"
            );

            moved.push(DisposedFile {
                source: path.clone(),
                destination: Some(destination),
            });
        }

        info!(bucket = %bucket, files = moved.len(), "quarantine batch complete");
        Ok(moved)
    }

    /// Where `path` lands inside `bucket`
    ///
    /// If something already occupies that spot, a random UUID is appended
    /// to the file stem so no existing file is ever overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OutsideMediaRoot` if `path` is not below the
    /// media root.
    pub fn destination(&self, path: &Path, bucket: &CaptureBucket) -> Result<PathBuf, Error> {
        let relative = self.root.relative(path)?;
        let destination = self.bucket_dir(bucket).join(relative);

        if destination.symlink_metadata().is_err() {
            return Ok(destination);
        }
        Ok(uniquify(&destination))
    }
}

/// `<stem>_<uuid><.ext>` next to `path`
fn uniquify(path: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push("_");
    name.push(Uuid::new_v4().to_string());
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Rename, falling back to copy and delete across filesystems
fn move_file(from: &Path, to: &Path) -> Result<(), Error> {
    let move_failed = |e: &std::io::Error| -> Error {
        StorageError::MoveFailed {
            from: from.display().to_string(),
            to: to.display().to_string(),
            message: e.to_string(),
        }
        .into()
    };

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            fs::copy(from, to).map_err(|e| move_failed(&e))?;
            fs::remove_file(from).map_err(|e| move_failed(&e))
        }
        Err(e) => Err(move_failed(&e)),
    }
}
