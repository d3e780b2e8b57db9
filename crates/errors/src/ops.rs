//! Operation orchestration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum OpsError {
    #[error("invalid exclude pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("component not found: {component}")]
    MissingComponent { component: String },

    #[error("failed to get user confirmation: {message}")]
    ConfirmationFailed { message: String },

    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl UserFacingError for OpsError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => Some("Exclude patterns only support the * wildcard."),
            Self::ConfirmationFailed { .. } => {
                Some("Run with --noinput when no terminal is attached.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidPattern { .. } => "ops.invalid_pattern",
            Self::MissingComponent { .. } => "ops.missing_component",
            Self::ConfirmationFailed { .. } => "ops.confirmation_failed",
            Self::SerializationError { .. } => "ops.serialization_error",
        };
        Some(code)
    }
}
