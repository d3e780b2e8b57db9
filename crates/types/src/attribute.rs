//! File-valued attribute descriptors

use serde::{Deserialize, Serialize};

/// Identifies one attribute of one record type that stores a path to a
/// managed file.
///
/// `app` is the model name operators pass to `--include-models`; uploads
/// for that model conventionally live under `MediaRoot/<app>/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub app: String,
    pub record_type: String,
    pub attribute: String,
}

impl AttributeDescriptor {
    pub fn new(
        app: impl Into<String>,
        record_type: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            app: app.into(),
            record_type: record_type.into(),
            attribute: attribute.into(),
        }
    }
}

impl std::fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.app, self.record_type, self.attribute)
    }
}
