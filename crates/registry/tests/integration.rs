//! Integration tests for registry

#[cfg(test)]
mod tests {
    use mediasweep_config::MediaRoot;
    use mediasweep_errors::{Error, RegistryError};
    use mediasweep_registry::*;
    use mediasweep_types::AttributeDescriptor;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"{
  "record_types": [
    {
      "app": "gallery",
      "name": "Photo",
      "file_attributes": ["image", "thumbnail"],
      "records": [
        {"image": "gallery/a.jpg", "thumbnail": "gallery/thumbs/a.jpg"},
        {"image": "gallery/b.jpg", "thumbnail": null},
        {"image": ""}
      ]
    },
    {
      "app": "docs",
      "name": "Attachment",
      "file_attributes": ["file"],
      "records": []
    }
  ]
}"#;

    #[test]
    fn test_load_manifest_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{MANIFEST}").unwrap();

        let registry = ManifestRegistry::load(temp_file.path()).unwrap();
        let attributes = registry.list_file_attributes().unwrap();
        assert_eq!(attributes.len(), 3);
        assert!(attributes.contains(&AttributeDescriptor::new("docs", "Attachment", "file")));

        let thumbs: Vec<_> = registry
            .iter_values(&AttributeDescriptor::new("gallery", "Photo", "thumbnail"))
            .unwrap()
            .collect();
        assert_eq!(
            thumbs,
            vec![Some("gallery/thumbs/a.jpg".to_string()), None, None]
        );
    }

    #[test]
    fn test_missing_manifest() {
        let result = ManifestRegistry::load(Path::new("/nonexistent/references.json"));
        assert!(matches!(
            result,
            Err(Error::Registry(RegistryError::ManifestNotFound { .. }))
        ));
    }

    #[test]
    fn test_malformed_manifest() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{\"record_types\": [").unwrap();

        let result = ManifestRegistry::load(temp_file.path());
        assert!(matches!(
            result,
            Err(Error::Registry(RegistryError::ManifestParse { .. }))
        ));
    }

    #[test]
    fn test_resolver_and_registry_together() {
        let registry = ManifestRegistry::from_manifest(Manifest::from_json(MANIFEST).unwrap());
        let storage = FileSystemStorage::new(MediaRoot::new("/srv/media").unwrap());

        let resolved: Vec<_> = registry
            .iter_values(&AttributeDescriptor::new("gallery", "Photo", "image"))
            .unwrap()
            .flatten()
            .filter(|v| !v.is_empty())
            .map(|v| storage.path(&v).unwrap())
            .collect();

        assert_eq!(
            resolved,
            vec![
                Path::new("/srv/media/gallery/a.jpg").to_path_buf(),
                Path::new("/srv/media/gallery/b.jpg").to_path_buf(),
            ]
        );
    }
}
