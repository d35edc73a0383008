//! Name validators for command input

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ValidationError;

static MINUS_NAME_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([a-z])[a-z0-9]+(-[a-z0-9]+)+)$").unwrap());

const MINUS_NAME_ID_REASON: &str =
    r#"should include lower case and number, format should like "hello-world-no3""#;

/// Returns true if `s` is a lowercase-hyphenated identifier like `hello-world-no3`
#[must_use]
pub fn is_minus_name_id(s: &str) -> bool {
    MINUS_NAME_ID.is_match(s)
}

/// Validates a project name
///
/// # Errors
///
/// Returns [`ValidationError::InvalidProjectName`] if the name is not a
/// lowercase-hyphenated identifier.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if is_minus_name_id(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidProjectName {
            name: name.to_string(),
            reason: MINUS_NAME_ID_REASON.to_string(),
        })
    }
}

/// Validates a module name used by the `--module` filter
///
/// # Errors
///
/// Returns [`ValidationError::InvalidModuleName`] if the name is not a
/// lowercase-hyphenated identifier.
pub fn validate_module_name(name: &str) -> Result<(), ValidationError> {
    if is_minus_name_id(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidModuleName {
            name: name.to_string(),
            reason: MINUS_NAME_ID_REASON.to_string(),
        })
    }
}
