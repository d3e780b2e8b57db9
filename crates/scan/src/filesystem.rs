//! Files physically present under the media root

use crate::ExcludePattern;
use mediasweep_config::MediaRoot;
use mediasweep_errors::Error;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks the media root for candidate files
#[derive(Debug, Clone)]
pub struct FilesystemScanner {
    root: MediaRoot,
    quarantine_dir: String,
}

impl FilesystemScanner {
    pub fn new(root: MediaRoot, quarantine_dir: impl Into<String>) -> Self {
        Self {
            root,
            quarantine_dir: quarantine_dir.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &MediaRoot {
        &self.root
    }

    #[must_use]
    pub fn quarantine_dir(&self) -> &str {
        &self.quarantine_dir
    }

    /// Absolute paths of every file under the media root that survives the
    /// include and exclude filters, in walk order
    ///
    /// With a non-empty `include_models`, only files under
    /// `MediaRoot/<model>` for one of the models are kept. A file whose
    /// relative path matches any exclude pattern is dropped. The quarantine
    /// subtree is never descended into. A missing media root yields no
    /// files.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern cannot be compiled.
    pub fn scan_present<S: AsRef<str>>(
        &self,
        exclude: &[S],
        include_models: &[S],
    ) -> Result<Vec<PathBuf>, Error> {
        let exclude = ExcludePattern::compile_all(exclude)?;
        let valid_prefixes: Vec<PathBuf> = include_models
            .iter()
            .map(|model| self.root.path().join(model.as_ref()))
            .collect();

        let mut present = Vec::new();

        if !self.root.path().is_dir() {
            debug!(root = %self.root, "media root does not exist, nothing to scan");
            return Ok(present);
        }

        let walker = WalkDir::new(self.root.path())
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_quarantine_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry during media scan");
                    continue;
                }
            };

            if !is_file_like(&entry) {
                continue;
            }

            let path = entry.path();
            if !is_path_valid(&valid_prefixes, path) {
                continue;
            }

            let Ok(relative) = path.strip_prefix(self.root.path()) else {
                continue;
            };
            let relative = slash_path(relative);

            if let Some(pattern) = exclude.iter().find(|p| p.matches(&relative)) {
                debug!(path = %relative, pattern = pattern.as_str(), "excluded");
                continue;
            }

            present.push(path.to_path_buf());
        }

        debug!(root = %self.root, files = present.len(), "media scan complete");
        Ok(present)
    }

    fn is_quarantine_entry(&self, entry: &DirEntry) -> bool {
        entry.depth() == 1
            && entry.file_type().is_dir()
            && entry.file_name() == self.quarantine_dir.as_str()
    }
}

/// Regular files and symlinks that do not point at a directory
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

/// A path is always valid when no include prefixes are set
fn is_path_valid(valid_prefixes: &[PathBuf], path: &Path) -> bool {
    valid_prefixes.is_empty() || valid_prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Relative path joined with `/` regardless of platform
fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
