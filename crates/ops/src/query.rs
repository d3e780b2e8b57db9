//! Read-only operations: model listing, validation, detection

use crate::{CleanupRequest, ModelInfo, OpsCtx};
use mediasweep_errors::{ConfigError, Error};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;

/// Model names accepted by `--include-models`
///
/// # Errors
///
/// Returns an error if the registry cannot be read.
pub fn possible_models(ctx: &OpsCtx) -> Result<BTreeSet<String>, Error> {
    ctx.registry.file_models()
}

/// Every model with its file attributes, sorted by model name
///
/// # Errors
///
/// Returns an error if the registry cannot be read.
pub fn list_models(ctx: &OpsCtx) -> Result<Vec<ModelInfo>, Error> {
    let mut models: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for attribute in ctx.registry.list_file_attributes()? {
        models
            .entry(attribute.app.clone())
            .or_default()
            .push(format!("{}.{}", attribute.record_type, attribute.attribute));
    }

    Ok(models
        .into_iter()
        .map(|(name, attributes)| ModelInfo { name, attributes })
        .collect())
}

/// Check every requested model owns at least one file attribute
///
/// Runs before anything touches the filesystem.
///
/// # Errors
///
/// Returns `ConfigError::UnknownModels` listing the unknown names and every
/// valid one.
pub fn validate_include_models(ctx: &OpsCtx, include_models: &[String]) -> Result<(), Error> {
    if include_models.is_empty() {
        return Ok(());
    }

    let available = possible_models(ctx)?;
    let requested: Vec<String> = include_models
        .iter()
        .filter(|model| !available.contains(model.as_str()))
        .cloned()
        .collect();

    if requested.is_empty() {
        debug!(models = ?include_models, "include models verified");
        return Ok(());
    }

    Err(ConfigError::UnknownModels {
        requested,
        available: available.into_iter().collect(),
    }
    .into())
}

/// Unused media for `request`, in filesystem walk order
///
/// # Errors
///
/// Returns an error if an exclude pattern is invalid or a stored reference
/// cannot be resolved.
pub fn find_unused(ctx: &OpsCtx, request: &CleanupRequest) -> Result<Vec<PathBuf>, Error> {
    mediasweep_scan::find_unused(
        &ctx.filesystem_scanner(),
        &ctx.reference_scanner(),
        &request.exclude,
        &request.include_models,
    )
}
