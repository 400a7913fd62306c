//! Email validation and normalization utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive email pattern: local part, `@`, domain with at least one dot.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Minimum accepted email length
pub const EMAIL_MIN_LENGTH: usize = 3;

/// Maximum accepted email length
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Normalize an email address for storage and comparison.
///
/// Emails are case-insensitive in this system; the lowercase form is the
/// canonical one used for uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether an email address is structurally valid
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.len() < EMAIL_MIN_LENGTH || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}
