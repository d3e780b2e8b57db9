//! Registry backed by a JSON snapshot of the application's records
//!
//! The application exports, for every record type that has file-valued
//! attributes, the attribute names and the stored value of each record:
//!
//! ```json
//! {
//!   "record_types": [
//!     {
//!       "app": "gallery",
//!       "name": "Photo",
//!       "file_attributes": ["image", "thumbnail"],
//!       "records": [
//!         {"image": "gallery/a.jpg", "thumbnail": null},
//!         {"image": "gallery/b.jpg"}
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::{ModelRegistry, ValueIter};
use mediasweep_errors::{Error, RegistryError};
use mediasweep_types::AttributeDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Registry snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub record_types: Vec<RecordType>,
}

/// One record type and its records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordType {
    pub app: String,
    pub name: String,
    #[serde(default)]
    pub file_attributes: Vec<String>,
    #[serde(default)]
    pub records: Vec<Map<String, Value>>,
}

impl RecordType {
    /// Stored value of `attribute` in one record; missing and null are both
    /// `None`
    fn value_of(&self, record: &Map<String, Value>, attribute: &str) -> Result<Option<String>, Error> {
        match record.get(attribute) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(RegistryError::InvalidValue {
                record_type: self.name.clone(),
                attribute: attribute.to_string(),
                message: format!("expected a string or null, found {other}"),
            }
            .into()),
        }
    }
}

impl Manifest {
    /// Parse a manifest from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a file attribute holds
    /// something other than a string or null.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let manifest: Self = serde_json::from_str(json).map_err(|e| RegistryError::ManifestParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check every file attribute value is a string or null
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidValue` for the first offending value.
    pub fn validate(&self) -> Result<(), Error> {
        for record_type in &self.record_types {
            for record in &record_type.records {
                for attribute in &record_type.file_attributes {
                    record_type.value_of(record, attribute)?;
                }
            }
        }
        Ok(())
    }

    fn find(&self, attribute: &AttributeDescriptor) -> Option<&RecordType> {
        self.record_types.iter().find(|rt| {
            rt.app == attribute.app
                && rt.name == attribute.record_type
                && rt.file_attributes.contains(&attribute.attribute)
        })
    }

    fn find_mut(&mut self, app: &str, name: &str) -> Option<&mut RecordType> {
        self.record_types
            .iter_mut()
            .find(|rt| rt.app == app && rt.name == name)
    }
}

/// [`ModelRegistry`] over a [`Manifest`]
#[derive(Debug, Clone, Default)]
pub struct ManifestRegistry {
    manifest: Manifest,
}

impl ManifestRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// Load a manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// manifest.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content =
            std::fs::read_to_string(path).map_err(|_| RegistryError::ManifestNotFound {
                path: path.display().to_string(),
            })?;

        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| RegistryError::ManifestParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        manifest.validate()?;

        debug!(
            path = %path.display(),
            record_types = manifest.record_types.len(),
            "loaded registry manifest"
        );
        Ok(Self { manifest })
    }

    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Declare a record type and its file attributes
    #[must_use]
    pub fn with_record_type(mut self, app: &str, name: &str, file_attributes: &[&str]) -> Self {
        self.manifest.record_types.push(RecordType {
            app: app.to_string(),
            name: name.to_string(),
            file_attributes: file_attributes.iter().map(ToString::to_string).collect(),
            records: Vec::new(),
        });
        self
    }

    /// Append a record to a declared record type
    ///
    /// Values for undeclared record types are dropped.
    #[must_use]
    pub fn with_record(mut self, app: &str, name: &str, values: &[(&str, Option<&str>)]) -> Self {
        if let Some(record_type) = self.manifest.find_mut(app, name) {
            let record = values
                .iter()
                .map(|(attr, value)| {
                    let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
                    ((*attr).to_string(), value)
                })
                .collect();
            record_type.records.push(record);
        }
        self
    }
}

impl ModelRegistry for ManifestRegistry {
    fn list_file_attributes(&self) -> Result<Vec<AttributeDescriptor>, Error> {
        Ok(self
            .manifest
            .record_types
            .iter()
            .flat_map(|rt| {
                rt.file_attributes
                    .iter()
                    .map(|attr| AttributeDescriptor::new(&rt.app, &rt.name, attr))
            })
            .collect())
    }

    fn iter_values(&self, attribute: &AttributeDescriptor) -> Result<ValueIter<'_>, Error> {
        let record_type =
            self.manifest
                .find(attribute)
                .ok_or_else(|| RegistryError::UnknownAttribute {
                    record_type: attribute.record_type.clone(),
                    attribute: attribute.attribute.clone(),
                })?;

        let values = record_type
            .records
            .iter()
            .map(|record| record_type.value_of(record, &attribute.attribute))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Box::new(values.into_iter()))
    }
}
