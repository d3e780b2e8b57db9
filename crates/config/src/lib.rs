#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for mediasweep
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/mediasweep/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;
mod media_root;

pub use constants as fixed;
pub use media_root::{normalize, MediaRoot};

use chrono::TimeDelta;
use mediasweep_errors::{ConfigError, Error};
use mediasweep_types::{ColorChoice, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub retention: RetentionConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    #[serde(default = "default_color_choice")]
    pub color: ColorChoice,
}

/// Media tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    pub root: Option<PathBuf>,
    #[serde(default = "default_quarantine_dir")]
    pub quarantine_dir: String,
    /// JSON snapshot of the application's file references
    pub registry: Option<PathBuf>,
}

/// Quarantine retention configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    #[serde(default = "default_retention_days")]
    pub days: u32,
}

// Default implementations

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Tty,
            color: ColorChoice::Auto,
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: None,
            quarantine_dir: default_quarantine_dir(),
            registry: None,
        }
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            days: constants::DEFAULT_RETENTION_DAYS,
        }
    }
}

// Default value functions for serde
fn default_output_format() -> OutputFormat {
    OutputFormat::Tty
}

fn default_color_choice() -> ColorChoice {
    ColorChoice::Auto
}

fn default_quarantine_dir() -> String {
    constants::QUARANTINE_DIR.to_string()
}

fn default_retention_days() -> u32 {
    constants::DEFAULT_RETENTION_DAYS
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("mediasweep").join(constants::CONFIG_FILE))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the file contents
    /// contain invalid TOML syntax, or if `media.quarantine_dir` is not a
    /// plain directory name.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        debug!(path = %path.display(), "loaded config file");

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.quarantine_dir()?;
        Ok(config)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub fn load() -> Result<Self, Error> {
        match Self::default_path() {
            Ok(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // MEDIASWEEP_MEDIA_ROOT
        if let Ok(root) = std::env::var("MEDIASWEEP_MEDIA_ROOT") {
            self.media.root = Some(PathBuf::from(root));
        }

        // MEDIASWEEP_REGISTRY
        if let Ok(registry) = std::env::var("MEDIASWEEP_REGISTRY") {
            self.media.registry = Some(PathBuf::from(registry));
        }

        // MEDIASWEEP_OUTPUT
        if let Ok(output) = std::env::var("MEDIASWEEP_OUTPUT") {
            self.general.default_output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "tty" => OutputFormat::Tty,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "MEDIASWEEP_OUTPUT".to_string(),
                        value: output,
                    }
                    .into())
                }
            };
        }

        // MEDIASWEEP_COLOR
        if let Ok(color) = std::env::var("MEDIASWEEP_COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "MEDIASWEEP_COLOR".to_string(),
                        value: color,
                    }
                    .into())
                }
            };
        }

        // MEDIASWEEP_RETENTION_DAYS
        if let Ok(days) = std::env::var("MEDIASWEEP_RETENTION_DAYS") {
            self.retention.days = days.parse().map_err(|_| ConfigError::InvalidValue {
                field: "MEDIASWEEP_RETENTION_DAYS".to_string(),
                value: days,
            })?;
        }

        Ok(())
    }

    /// Get the configured media root
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if no media root was configured.
    pub fn media_root(&self) -> Result<MediaRoot, Error> {
        let root = self
            .media
            .root
            .as_ref()
            .ok_or_else(|| ConfigError::MissingField {
                field: "media.root".to_string(),
            })?;
        MediaRoot::new(root)
    }

    /// Name of the quarantine directory directly under the media root
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` unless the name is a single plain
    /// path component.
    pub fn quarantine_dir(&self) -> Result<&str, Error> {
        let name = self.media.quarantine_dir.as_str();
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.ends_with('/') => Ok(name),
            _ => Err(ConfigError::InvalidValue {
                field: "media.quarantine_dir".to_string(),
                value: name.to_string(),
            }
            .into()),
        }
    }

    /// Get the configured registry manifest path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if no registry was configured.
    pub fn registry_path(&self) -> Result<&Path, Error> {
        self.media.registry.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "media.registry".to_string(),
            }
            .into()
        })
    }

    /// Retention window as a chrono delta
    #[must_use]
    pub fn retention_window(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.retention.days))
    }
}
