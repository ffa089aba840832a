//! Environment-derived settings.
//!
//! Command-line flags always win; these helpers only supply defaults.

use crate::constants::{BASE_URL_ENV_VAR, CI_ENV_VAR, IANA_BASE_URL};

/// True when the `CI` value, lower-cased, equals "true".
pub fn is_ci_value(value: Option<&str>) -> bool {
    value.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

/// Reads `CI` from the process environment.
pub fn running_in_ci() -> bool {
    is_ci_value(std::env::var(CI_ENV_VAR).ok().as_deref())
}

/// Registry base URL: `MEDIA_TYPES_BASE_URL` if set and non-empty, else IANA.
pub fn base_url_from(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(IANA_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

pub fn default_base_url() -> String {
    base_url_from(std::env::var(BASE_URL_ENV_VAR).ok().as_deref())
}
