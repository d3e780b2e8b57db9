//! Integration tests for types

#[cfg(test)]
mod tests {
    use mediasweep_types::*;
    use std::path::PathBuf;

    #[test]
    fn test_output_format_default() {
        let fmt = OutputFormat::default();
        assert_eq!(fmt, OutputFormat::Tty);
    }

    #[test]
    fn test_disposal_serialization() {
        let json = serde_json::to_string(&Disposal::Quarantine).unwrap();
        assert_eq!(json, r#""quarantine""#);

        let deserialized: Disposal = serde_json::from_str(r#""delete""#).unwrap();
        assert_eq!(deserialized, Disposal::Delete);
        assert_eq!(Disposal::default(), Disposal::Quarantine);
    }

    #[test]
    fn test_capture_bucket_serializes_as_dir_name() {
        let bucket = CaptureBucket::parse("2024-03-09_14:05").unwrap();
        let json = serde_json::to_string(&bucket).unwrap();
        assert_eq!(json, r#""2024-03-09_14:05""#);

        let back: CaptureBucket = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bucket);
        assert!(serde_json::from_str::<CaptureBucket>(r#""not-a-bucket""#).is_err());
    }

    #[test]
    fn test_cleanup_report_json_shape() {
        let report = CleanupReport::stopped(
            CleanupOutcome::DryRun,
            Disposal::Quarantine,
            vec![PathBuf::from("/srv/media/orphan.txt")],
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["outcome"], "dry_run");
        assert_eq!(value["disposal"], "quarantine");
        assert_eq!(value["unused"][0], "/srv/media/orphan.txt");
        assert!(value["bucket"].is_null());
    }

    #[test]
    fn test_attribute_descriptor_display() {
        let attr = AttributeDescriptor::new("gallery", "Photo", "image");
        assert_eq!(attr.to_string(), "gallery.Photo.image");
    }
}
