//! Local filesystem storage rooted at the media root

use crate::StorageResolver;
use mediasweep_config::{normalize, MediaRoot};
use mediasweep_errors::{Error, RegistryError};
use std::path::PathBuf;

/// Resolves stored names relative to the media root
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    root: MediaRoot,
}

impl FileSystemStorage {
    #[must_use]
    pub fn new(root: MediaRoot) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &MediaRoot {
        &self.root
    }
}

impl StorageResolver for FileSystemStorage {
    fn path(&self, value: &str) -> Result<PathBuf, Error> {
        if value.contains('\0') {
            return Err(RegistryError::Resolution {
                value: value.to_string(),
                reason: "contains a NUL byte".to_string(),
            }
            .into());
        }

        // An absolute value replaces the root on join and must still land
        // inside it
        let resolved = normalize(&self.root.path().join(value));
        if !self.root.contains(&resolved) {
            return Err(RegistryError::Resolution {
                value: value.to_string(),
                reason: format!("resolves outside the media root {}", self.root),
            }
            .into());
        }
        Ok(resolved)
    }
}
