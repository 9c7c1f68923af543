//! Fail-fast file validation.

use crate::config::ValidationRule;
use crate::error::{ValidationError, ValidationOutcome};
use crate::models::FileSet;

/// Check every file against `rule`, in order.
///
/// Per file the type is checked before the size. The first violation is
/// returned and later files are not looked at. An empty set is valid.
pub fn validate<H>(files: &FileSet<H>, rule: &ValidationRule) -> ValidationOutcome {
    for file in files {
        if !rule.allow.accepts(file.extension(), &file.mime_type) {
            return Err(ValidationError::UnsupportedType(file.name.clone()));
        }
        if file.size_bytes > rule.max_size_bytes {
            return Err(ValidationError::TooLarge(file.name.clone()));
        }
    }
    Ok(())
}
