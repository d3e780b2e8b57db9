//! The media root every managed path must live under

use mediasweep_errors::{Error, StorageError};
use std::path::{Component, Path, PathBuf};

/// Absolute, lexically normalised root directory of all managed files.
///
/// The directory does not have to exist; a missing root simply scans as
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRoot(PathBuf);

impl MediaRoot {
    /// Build a media root, resolving relative paths against the current
    /// directory
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative and the current directory
    /// cannot be determined.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(Self(normalize(&absolute)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Quarantine directory for the given directory name
    #[must_use]
    pub fn quarantine_dir(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }

    /// Whether `path` is the root itself or lies below it
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.0)
    }

    /// Path of `path` relative to the root
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OutsideMediaRoot` if `path` is not below the
    /// root.
    pub fn relative<'a>(&self, path: &'a Path) -> Result<&'a Path, Error> {
        path.strip_prefix(&self.0).map_err(|_| {
            StorageError::OutsideMediaRoot {
                path: path.display().to_string(),
                root: self.0.display().to_string(),
            }
            .into()
        })
    }
}

impl AsRef<Path> for MediaRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for MediaRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` never climbs above the filesystem root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
