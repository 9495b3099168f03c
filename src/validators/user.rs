//! User-related custom validators.

use validator::ValidationError;

use crate::constants::ERR_USERNAME_WHITESPACE;

/// Rejects usernames containing whitespace. Lookups match usernames exactly,
/// so nothing is trimmed.
pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
    if username.chars().any(char::is_whitespace) {
        let mut error = ValidationError::new("invalid_username");
        error.message = Some(ERR_USERNAME_WHITESPACE.into());
        return Err(error);
    }
    Ok(())
}
