#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations orchestration for mediasweep
//!
//! This crate sits between the CLI and the scan and quarantine crates. It
//! owns the run sequence: validate, detect, confirm, dispose, prune.

mod context;
mod maintenance;
mod query;
mod small_ops;
mod types;

pub use context::{retention_sweeper, OpsContextBuilder, OpsCtx};
pub use small_ops::{
    cleanup, find_unused, list_models, possible_models, sweep, validate_include_models,
};
pub use types::{CleanupRequest, ModelInfo};

use mediasweep_errors::{Error, OpsError};
use mediasweep_types::{CleanupReport, SweepReport};

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Models that own file attributes
    Models(Vec<ModelInfo>),
    /// Cleanup report
    Cleanup(CleanupReport),
    /// Retention sweep report
    Sweep(SweepReport),
    /// Generic success message
    Success(String),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OpsError::SerializationError {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Check if this is a success result
    ///
    /// Only a sweep that failed to remove some expired bucket is
    /// unsuccessful; a declined cleanup still ran correctly.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Models(_)
            | OperationResult::Cleanup(_)
            | OperationResult::Success(_) => true,
            OperationResult::Sweep(report) => report.failed.is_empty(),
        }
    }
}
