use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::ERR_INVALID_USER_ID;
use crate::errors::Error;

/// Opaque user identifier, assigned once by the store at insertion.
///
/// The value is the 24-character hex form of a BSON ObjectId and is stored
/// as a plain string in the `_id` field. The default value is empty and
/// marks a record the store has not assigned an id to yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserID(String);

impl UserID {
    /// Draw a fresh, globally unique identifier.
    pub fn generate() -> Self {
        UserID(ObjectId::new().to_hex())
    }

    /// Accept an identifier coming from outside the store (a URL segment,
    /// a session). Only 24 hex characters are valid.
    pub fn parse(s: &str) -> Result<Self, Error> {
        ObjectId::parse_str(s)
            .map(|oid| UserID(oid.to_hex()))
            .map_err(|_| Error::validation(ERR_INVALID_USER_ID))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObjectId> for UserID {
    fn from(oid: ObjectId) -> Self {
        UserID(oid.to_hex())
    }
}

/// User document as persisted, one per account.
///
/// Field names must stay in step with `constants::collections`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserID,
    pub email: String,
    pub username: String,
    #[serde(rename = "passhash")]
    pub pass_hash: String,
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    #[serde(rename = "lastname", default)]
    pub last_name: String,
}

impl User {
    /// Check a plaintext password against the stored bcrypt hash.
    pub fn authenticate(&self, password: &str) -> Result<(), Error> {
        if bcrypt::verify(password, &self.pass_hash)? {
            Ok(())
        } else {
            Err(Error::InvalidCredentials)
        }
    }
}

// Keeps the password hash out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("pass_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
