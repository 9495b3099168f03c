//! Signup payload and its conversion into a storable `User`.

use serde::Deserialize;
use validator::Validate;

use crate::errors::Error;
use crate::models::{User, UserID};
use crate::validators::validate_username_format;

/// Caller-supplied signup input. Carries the raw password; it is never
/// persisted as-is.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Password and confirmation do not match"))]
    pub password_conf: String,
    #[validate(
        length(
            min = 1,
            max = 50,
            message = "Username must be between 1 and 50 characters"
        ),
        custom(function = "validate_username_format")
    )]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl NewUser {
    /// Validate the input and hash the password at `cost`.
    ///
    /// The returned `User` has no id; the store assigns one on insert.
    /// Any failure here happens before a store is touched.
    pub fn to_user(&self, cost: u32) -> Result<User, Error> {
        self.validate()?;

        let pass_hash = bcrypt::hash(&self.password, cost)?;
        Ok(User {
            id: UserID::default(),
            email: self.email.clone(),
            username: self.username.clone(),
            pass_hash,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}
