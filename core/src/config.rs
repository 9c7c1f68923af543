//! Upload configuration.
//!
//! One canonical pipeline, parameterized by an [`UploadConfig`]. Differences
//! between deployments (size limit, multipart field name, MIME type vs
//! extension checks) are configuration, not separate code paths.
//!
//! # JSON form
//!
//! ```json
//! {
//!   "endpoint": "https://example.com/upload",
//!   "fieldName": "files[]",
//!   "rule": {
//!     "allow": { "kind": "extensions", "values": ["png", "jpeg", "webp"] },
//!     "maxSizeBytes": 1000000
//!   }
//! }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{ConfigError, ConfigResult};

/// MIME types accepted by default.
pub const DEFAULT_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Default per-file ceiling, in bytes (1 MB, decimal).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1_000_000;

/// Which property of a file the allow-list is matched against.
///
/// Matching is ASCII case-insensitive in both modes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "camelCase")]
pub enum AllowList {
    /// Declared MIME type, e.g. `image/png`
    MimeTypes(BTreeSet<String>),
    /// File-name extension without the dot, e.g. `png`
    Extensions(BTreeSet<String>),
}

impl AllowList {
    pub fn mime_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowList::MimeTypes(types.into_iter().map(Into::into).collect())
    }

    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowList::Extensions(extensions.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AllowList::MimeTypes(set) | AllowList::Extensions(set) => set.is_empty(),
        }
    }

    fn contains(set: &BTreeSet<String>, candidate: &str) -> bool {
        set.iter().any(|allowed| allowed.eq_ignore_ascii_case(candidate))
    }

    /// Whether a file with this name and declared type is accepted.
    pub fn accepts(&self, name_extension: Option<&str>, mime_type: &str) -> bool {
        match self {
            AllowList::MimeTypes(set) => Self::contains(set, mime_type),
            AllowList::Extensions(set) => {
                name_extension.map_or(false, |ext| Self::contains(set, ext))
            }
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::mime_types(DEFAULT_MIME_TYPES)
    }
}

/// Type and size constraints applied to every file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRule {
    /// Accepted file types
    pub allow: AllowList,
    /// Largest accepted file, in bytes (inclusive)
    pub max_size_bytes: u64,
}

impl ValidationRule {
    pub fn new(allow: AllowList, max_size_bytes: u64) -> Self {
        Self { allow, max_size_bytes }
    }
}

impl Default for ValidationRule {
    fn default() -> Self {
        Self::new(AllowList::default(), DEFAULT_MAX_SIZE_BYTES)
    }
}

/// Everything the controller needs besides its collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// Target URL of the `POST` request
    pub endpoint: String,
    /// Multipart field name every file is sent under
    pub field_name: String,
    /// Per-file constraints
    pub rule: ValidationRule,
}

impl UploadConfig {
    pub fn new(
        endpoint: impl Into<String>,
        field_name: impl Into<String>,
        rule: ValidationRule,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            field_name: field_name.into(),
            rule,
        }
    }

    /// Parse and check a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: UploadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controller cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        let endpoint = self.endpoint.trim();
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| endpoint.len() > scheme.len() && endpoint.starts_with(scheme));
        if !(has_scheme || endpoint.starts_with('/')) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.field_name.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        if self.rule.allow.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        if self.rule.max_size_bytes == 0 {
            return Err(ConfigError::ZeroSizeLimit);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new("https://httpbin.org/post", "file", ValidationRule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = UploadConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field_name, "file");
        assert_eq!(config.rule.max_size_bytes, 1_000_000);
        assert!(config.rule.allow.accepts(Some("png"), "image/png"));
    }

    #[test]
    fn test_from_json_with_extension_rule() {
        let json = r#"{
            "endpoint": "https://example.com/upload",
            "fieldName": "files[]",
            "rule": {
                "allow": { "kind": "extensions", "values": ["png", "jpeg", "webp"] },
                "maxSizeBytes": 2000000
            }
        }"#;

        let config = UploadConfig::from_json(json).unwrap();
        assert_eq!(config.field_name, "files[]");
        assert_eq!(config.rule.max_size_bytes, 2_000_000);
        assert_eq!(config.rule.allow, AllowList::extensions(["png", "jpeg", "webp"]));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = UploadConfig::from_json(r#"{ "endpoint": "/upload" }"#).unwrap();
        assert_eq!(config.field_name, "file");
        assert_eq!(config.rule, ValidationRule::default());
    }

    #[test]
    fn test_validate_rejects_unusable_configs() {
        let mut config = UploadConfig::default();
        config.endpoint = "ftp://example.com".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));

        let mut config = UploadConfig::default();
        config.field_name = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyFieldName)));

        let mut config = UploadConfig::default();
        config.rule.allow = AllowList::mime_types(Vec::<String>::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyAllowList)));

        let mut config = UploadConfig::default();
        config.rule.max_size_bytes = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSizeLimit)));
    }

    #[test]
    fn test_relative_endpoint_accepted() {
        let mut config = UploadConfig::default();
        config.endpoint = "/api/upload".into();
        assert!(config.validate().is_ok());

        config.endpoint = "api/upload".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));

        config.endpoint = "https://".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(UploadConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_allow_list_case_insensitive() {
        let mimes = AllowList::mime_types(["image/PNG"]);
        assert!(mimes.accepts(None, "image/png"));

        let exts = AllowList::extensions(["jpeg"]);
        assert!(exts.accepts(Some("JPEG"), ""));
        assert!(!exts.accepts(None, "image/jpeg"));
    }
}
