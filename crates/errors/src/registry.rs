//! Model registry and reference resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RegistryError {
    #[error("registry manifest not found: {path}")]
    ManifestNotFound { path: String },

    #[error("failed to parse registry manifest {path}: {message}")]
    ManifestParse { path: String, message: String },

    #[error("unknown file attribute: {record_type}.{attribute}")]
    UnknownAttribute {
        record_type: String,
        attribute: String,
    },

    #[error("invalid value for {record_type}.{attribute}: {message}")]
    InvalidValue {
        record_type: String,
        attribute: String,
        message: String,
    },

    #[error("cannot resolve stored reference {value:?}: {reason}")]
    Resolution { value: String, reason: String },
}

impl UserFacingError for RegistryError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ManifestNotFound { .. } => {
                Some("Export the record references from the application and point --registry at the file.")
            }
            Self::ManifestParse { .. } | Self::InvalidValue { .. } => {
                Some("Regenerate the registry manifest; file attributes must hold strings or null.")
            }
            Self::Resolution { .. } => Some(
                "A record references a file outside the media root. Fix the record before cleaning up.",
            ),
            Self::UnknownAttribute { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ManifestNotFound { .. } => "registry.manifest_not_found",
            Self::ManifestParse { .. } => "registry.manifest_parse",
            Self::UnknownAttribute { .. } => "registry.unknown_attribute",
            Self::InvalidValue { .. } => "registry.invalid_value",
            Self::Resolution { .. } => "registry.resolution",
        };
        Some(code)
    }
}
