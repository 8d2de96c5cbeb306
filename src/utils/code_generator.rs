//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 8;

/// Longest accepted custom code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Random bytes per code; 6 bytes encode to exactly 8 base64 characters.
const CODE_LENGTH_BYTES: usize = 6;

/// Characters allowed in a custom code (the generated-code alphabet).
pub static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid custom code regex"));

/// Path segments owned by other routes; a link under these would be unreachable.
pub const RESERVED_CODES: &[&str] = &["shorten", "delete", "health", "static"];

/// Generates a random 8-character short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, so codes only contain `A-Z`, `a-z`, `0-9`, `-` and `_`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!(error = %e, "System RNG failed");
        AppError::internal("Failed to generate short code")
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.iter().any(|r| r.eq_ignore_ascii_case(code))
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(format!(
            "Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"
        )));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
        ));
    }

    if is_reserved_code(code) {
        return Err(AppError::bad_request("This code is reserved"));
    }

    Ok(())
}
