//! Fixed names and limits that are not exposed as free-form settings

/// Name of the quarantine directory directly under the media root
pub const QUARANTINE_DIR: &str = "quarantine";

/// Capture bucket directory layout, re-exported for callers that only
/// depend on config
pub const BUCKET_FORMAT: &str = mediasweep_types::BUCKET_FORMAT;

/// Days a quarantine bucket is kept before the retention sweep deletes it
pub const DEFAULT_RETENTION_DAYS: u32 = 90;

/// Config file name inside `<config_dir>/mediasweep/`
pub const CONFIG_FILE: &str = "config.toml";
