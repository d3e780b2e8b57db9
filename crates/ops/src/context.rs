//! Operations context for dependency injection

use mediasweep_config::{Config, MediaRoot};
use mediasweep_errors::{Error, OpsError};
use mediasweep_quarantine::{QuarantineMover, RetentionSweeper};
use mediasweep_registry::{FileSystemStorage, ManifestRegistry, ModelRegistry, StorageResolver};
use mediasweep_scan::{FilesystemScanner, ReferenceScanner};
use tracing::debug;

/// Operations context providing access to every component a run needs
pub struct OpsCtx {
    /// Resolved configuration
    pub config: Config,
    /// Media root every path is relative to
    pub root: MediaRoot,
    /// Source of file references
    pub registry: Box<dyn ModelRegistry>,
    /// Maps stored reference values to paths
    pub storage: Box<dyn StorageResolver>,
}

impl OpsCtx {
    /// Create a context from its parts
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no media root or an
    /// invalid quarantine directory name.
    pub fn new(
        config: Config,
        registry: Box<dyn ModelRegistry>,
        storage: Box<dyn StorageResolver>,
    ) -> Result<Self, Error> {
        let root = config.media_root()?;
        config.quarantine_dir()?;
        Ok(Self {
            config,
            root,
            registry,
            storage,
        })
    }

    /// Create a context backed by the configured registry manifest and a
    /// filesystem storage rooted at the media root
    ///
    /// # Errors
    ///
    /// Returns an error if the media root or registry is not configured, the
    /// quarantine directory name is invalid, or the manifest cannot be loaded.
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let root = config.media_root()?;
        config.quarantine_dir()?;
        let registry = ManifestRegistry::load(config.registry_path()?)?;
        let storage = FileSystemStorage::new(root.clone());

        debug!(root = %root, "operations context ready");

        Ok(Self {
            config,
            root,
            registry: Box::new(registry),
            storage: Box::new(storage),
        })
    }

    /// Name of the quarantine directory under the media root
    #[must_use]
    pub fn quarantine_dir(&self) -> &str {
        &self.config.media.quarantine_dir
    }

    #[must_use]
    pub fn filesystem_scanner(&self) -> FilesystemScanner {
        FilesystemScanner::new(self.root.clone(), self.quarantine_dir())
    }

    #[must_use]
    pub fn reference_scanner(&self) -> ReferenceScanner<'_> {
        ReferenceScanner::new(self.registry.as_ref(), self.storage.as_ref())
    }

    #[must_use]
    pub fn mover(&self) -> QuarantineMover {
        QuarantineMover::new(self.root.clone(), self.quarantine_dir())
    }
}

/// Retention sweeper over the configured quarantine directory
///
/// Needs only the media root and the retention window, so a sweep runs
/// without a registry.
///
/// # Errors
///
/// Returns an error if the media root is not configured or the quarantine
/// directory name is invalid.
pub fn retention_sweeper(config: &Config) -> Result<RetentionSweeper, Error> {
    let root = config.media_root()?;
    let quarantine = root.quarantine_dir(config.quarantine_dir()?);
    Ok(RetentionSweeper::new(quarantine, config.retention_window()))
}

/// Builder for the operations context
pub struct OpsContextBuilder {
    config: Option<Config>,
    registry: Option<Box<dyn ModelRegistry>>,
    storage: Option<Box<dyn StorageResolver>>,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            registry: None,
            storage: None,
        }
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set model registry
    #[must_use]
    pub fn with_registry(mut self, registry: impl ModelRegistry + 'static) -> Self {
        self.registry = Some(Box::new(registry));
        self
    }

    /// Set storage resolver
    #[must_use]
    pub fn with_storage(mut self, storage: impl StorageResolver + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Build the context
    ///
    /// When no storage resolver was set, a [`FileSystemStorage`] over the
    /// configured media root is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or registry is missing, or the
    /// configuration has no media root or an invalid quarantine directory.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let config = self.config.ok_or_else(|| OpsError::MissingComponent {
            component: "config".to_string(),
        })?;

        let registry = self.registry.ok_or_else(|| OpsError::MissingComponent {
            component: "registry".to_string(),
        })?;

        let root = config.media_root()?;
        config.quarantine_dir()?;
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(FileSystemStorage::new(root.clone())));

        Ok(OpsCtx {
            config,
            root,
            registry,
            storage,
        })
    }
}

impl Default for OpsContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediasweep_errors::ConfigError;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.media.root = Some(root.to_path_buf());
        config
    }

    #[test]
    fn test_builder_requires_registry() {
        let temp = TempDir::new().unwrap();
        let result = OpsContextBuilder::new()
            .with_config(config_for(temp.path()))
            .build();
        assert!(matches!(
            result,
            Err(Error::Ops(OpsError::MissingComponent { component })) if component == "registry"
        ));
    }

    #[test]
    fn test_builder_requires_media_root() {
        let result = OpsContextBuilder::new()
            .with_config(Config::default())
            .with_registry(ManifestRegistry::new())
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_sweeper_and_mover_share_quarantine_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = config_for(temp.path());
        config.media.quarantine_dir = "held".to_string();

        let ctx = OpsContextBuilder::new()
            .with_config(config)
            .with_registry(ManifestRegistry::new())
            .build()
            .unwrap();

        assert_eq!(ctx.mover().quarantine_root(), temp.path().join("held"));
        assert_eq!(ctx.filesystem_scanner().quarantine_dir(), "held");
    }

    #[test]
    fn test_builder_rejects_escaping_quarantine_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = config_for(temp.path());
        config.media.quarantine_dir = "../held".to_string();

        let result = OpsContextBuilder::new()
            .with_config(config)
            .with_registry(ManifestRegistry::new())
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) if field == "media.quarantine_dir"
        ));
    }

    #[test]
    fn test_retention_sweeper_needs_no_registry() {
        let temp = TempDir::new().unwrap();
        let mut config = config_for(temp.path());
        config.media.quarantine_dir = "held".to_string();

        let sweeper = retention_sweeper(&config).unwrap();
        assert_eq!(sweeper.quarantine_root(), temp.path().join("held"));
        assert!(retention_sweeper(&Config::default()).is_err());
    }

    #[test]
    fn test_from_config_requires_registry_path() {
        let temp = TempDir::new().unwrap();
        let result = OpsCtx::from_config(config_for(temp.path()));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field })) if field == "media.registry"
        ));
    }
}
