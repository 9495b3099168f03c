//! Error message constants.

pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ERR_USERNAME_WHITESPACE: &str = "Username must not contain whitespace";
