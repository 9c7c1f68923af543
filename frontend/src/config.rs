//! Application configuration.
//!
//! Defaults are hardcoded below. A host page can override them by embedding
//! a JSON [`UploadConfig`] in
//! `<script type="application/json" id="upload-config">`.

use imgdrop::config::{DEFAULT_MAX_SIZE_BYTES, DEFAULT_MIME_TYPES};
use imgdrop::{AllowList, UploadConfig, ValidationRule};

/// Upload endpoint.
///
/// Public echo service standing in for a real backend.
pub const DEFAULT_ENDPOINT: &str = "https://httpbin.org/post";

/// Multipart field name each file is sent under.
pub const DEFAULT_FIELD_NAME: &str = "file";

/// Maximum size per file (in bytes).
///
/// 1 MB, decimal.
pub const MAX_FILE_SIZE: u64 = DEFAULT_MAX_SIZE_BYTES;

/// Id of the optional config element in the host page.
pub const CONFIG_ELEMENT_ID: &str = "upload-config";

/// Application name, used for the document title.
pub const APP_NAME: &str = "Imgdrop";

pub fn default_config() -> UploadConfig {
    UploadConfig::new(
        DEFAULT_ENDPOINT,
        DEFAULT_FIELD_NAME,
        ValidationRule::new(AllowList::mime_types(DEFAULT_MIME_TYPES), MAX_FILE_SIZE),
    )
}

/// Parse an embedded config, falling back to the defaults when it is unusable.
pub fn parse_config(json: &str) -> UploadConfig {
    match UploadConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("⚠️ Ignoring embedded upload config: {}", e);
            default_config()
        }
    }
}

/// Configuration for this page.
pub fn load_config() -> UploadConfig {
    let embedded = gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) => parse_config(&json),
        None => {
            log::debug!("No #{} element, using default upload config", CONFIG_ELEMENT_ID);
            default_config()
        }
    }
}
