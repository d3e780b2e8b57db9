//! Integration tests for config

#[cfg(test)]
mod tests {
    use mediasweep_config::*;
    use mediasweep_types::{ColorChoice, OutputFormat};
    use std::io::Write;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "MEDIASWEEP_MEDIA_ROOT",
            "MEDIASWEEP_REGISTRY",
            "MEDIASWEEP_OUTPUT",
            "MEDIASWEEP_COLOR",
            "MEDIASWEEP_RETENTION_DAYS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[general]
default_output = "plain"
color = "never"

[media]
root = "/srv/app/media"
registry = "/srv/app/references.json"

[retention]
days = 30
        "#
        )
        .unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.general.default_output, OutputFormat::Plain);
        assert_eq!(config.general.color, ColorChoice::Never);
        assert_eq!(
            config.media_root().unwrap().path(),
            Path::new("/srv/app/media")
        );
        assert_eq!(
            config.registry_path().unwrap(),
            Path::new("/srv/app/references.json")
        );
        assert_eq!(config.media.quarantine_dir, fixed::QUARANTINE_DIR);
        assert_eq!(config.retention.days, 30);
        assert_eq!(config.retention_window().num_days(), 30);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.retention.days, 90);
        assert_eq!(config.media.quarantine_dir, "quarantine");
        assert!(config.media_root().is_err());
        assert!(config.registry_path().is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = Config::load_from_file(Path::new("/nonexistent/mediasweep.toml"));
        assert!(matches!(
            result,
            Err(mediasweep_errors::Error::Config(
                mediasweep_errors::ConfigError::NotFound { .. }
            ))
        ));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[media\nroot = ").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(
            result,
            Err(mediasweep_errors::Error::Config(
                mediasweep_errors::ConfigError::ParseError { .. }
            ))
        ));
    }

    #[test]
    fn test_merge_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("MEDIASWEEP_MEDIA_ROOT", "/data/media");
        std::env::set_var("MEDIASWEEP_OUTPUT", "json");
        std::env::set_var("MEDIASWEEP_COLOR", "always");
        std::env::set_var("MEDIASWEEP_RETENTION_DAYS", "14");

        let mut config = Config::default();
        config.merge_env().unwrap();

        assert_eq!(config.media_root().unwrap().path(), Path::new("/data/media"));
        assert_eq!(config.general.default_output, OutputFormat::Json);
        assert_eq!(config.general.color, ColorChoice::Always);
        assert_eq!(config.retention.days, 14);

        clear_env();
    }

    #[test]
    fn test_invalid_env_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("MEDIASWEEP_RETENTION_DAYS", "ninety");

        let mut config = Config::default();
        let result = config.merge_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    fn test_quarantine_dir_must_be_single_name() {
        let mut config = Config::default();
        assert_eq!(config.quarantine_dir().unwrap(), "quarantine");

        config.media.quarantine_dir = "held".to_string();
        assert_eq!(config.quarantine_dir().unwrap(), "held");

        for value in ["../held", "a/b", "", ".", "/tmp/held", "held/"] {
            config.media.quarantine_dir = value.to_string();
            let err = config.quarantine_dir().unwrap_err();
            assert!(
                matches!(
                    &err,
                    mediasweep_errors::Error::Config(mediasweep_errors::ConfigError::InvalidValue { field, .. })
                        if field == "media.quarantine_dir"
                ),
                "{value:?} accepted: {err}"
            );
        }
    }

    #[test]
    fn test_load_rejects_escaping_quarantine_dir() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[media]\nquarantine_dir = \"../held\"").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(
            result,
            Err(mediasweep_errors::Error::Config(
                mediasweep_errors::ConfigError::InvalidValue { .. }
            ))
        ));
    }
}
