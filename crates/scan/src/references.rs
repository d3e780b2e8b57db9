//! Files still referenced by application records

use mediasweep_errors::Error;
use mediasweep_registry::{ModelRegistry, StorageResolver};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Resolves every non-empty file reference in the registry
pub struct ReferenceScanner<'a> {
    registry: &'a dyn ModelRegistry,
    storage: &'a dyn StorageResolver,
}

impl<'a> ReferenceScanner<'a> {
    pub fn new(registry: &'a dyn ModelRegistry, storage: &'a dyn StorageResolver) -> Self {
        Self { registry, storage }
    }

    /// Absolute paths referenced by at least one record
    ///
    /// Null and empty values are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read or any stored value
    /// fails to resolve; a single unresolvable reference aborts the scan.
    pub fn scan_referenced(&self) -> Result<HashSet<PathBuf>, Error> {
        let mut referenced = HashSet::new();

        for attribute in self.registry.list_file_attributes()? {
            let mut count = 0usize;
            for value in self.registry.iter_values(&attribute)?.flatten() {
                if value.is_empty() {
                    continue;
                }
                referenced.insert(self.storage.path(&value)?);
                count += 1;
            }
            debug!(attribute = %attribute, references = count, "scanned file attribute");
        }

        Ok(referenced)
    }
}
