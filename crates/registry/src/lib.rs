#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Model registry capability for mediasweep
//!
//! The cleanup core never inspects application records directly. It asks a
//! [`ModelRegistry`] which attributes can hold file references and what
//! each record stores in them, and asks a [`StorageResolver`] where a stored
//! value lives on disk.

mod manifest;
mod storage;

pub use manifest::{Manifest, ManifestRegistry, RecordType};
pub use storage::FileSystemStorage;

use mediasweep_errors::Error;
use mediasweep_types::AttributeDescriptor;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Values of one attribute across all records; `None` is a null column
pub type ValueIter<'a> = Box<dyn Iterator<Item = Option<String>> + 'a>;

/// Source of file-valued attributes and their stored values
pub trait ModelRegistry {
    /// Every attribute, across every record type, that can hold a file
    /// reference
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    fn list_file_attributes(&self) -> Result<Vec<AttributeDescriptor>, Error>;

    /// The stored value of `attribute` for every record of its type
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is unknown to the registry.
    fn iter_values(&self, attribute: &AttributeDescriptor) -> Result<ValueIter<'_>, Error>;

    /// Model names that own at least one file attribute
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    fn file_models(&self) -> Result<BTreeSet<String>, Error> {
        Ok(self
            .list_file_attributes()?
            .into_iter()
            .map(|attribute| attribute.app)
            .collect())
    }
}

/// Maps a stored reference value to an absolute filesystem path
pub trait StorageResolver {
    /// # Errors
    ///
    /// Returns `RegistryError::Resolution` if the value cannot be mapped to
    /// a path under the storage location.
    fn path(&self, value: &str) -> Result<PathBuf, Error>;
}
