//! Typed lookup keys for single-user queries.

use mongodb::bson::Document;

use crate::constants::{FIELD_EMAIL, FIELD_ID, FIELD_USERNAME};
use crate::models::{User, UserID};
use crate::utils::log_sanitizer::{mask_email, mask_username};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    ById(UserID),
    ByEmail(String),
    ByUserName(String),
}

impl UserQuery {
    /// Equality filter document for the document store.
    pub fn filter(&self) -> Document {
        let mut filter = Document::new();
        match self {
            UserQuery::ById(id) => filter.insert(FIELD_ID, id.as_str()),
            UserQuery::ByEmail(email) => filter.insert(FIELD_EMAIL, email.as_str()),
            UserQuery::ByUserName(name) => filter.insert(FIELD_USERNAME, name.as_str()),
        };
        filter
    }

    /// Same predicate as [`filter`](Self::filter), evaluated in memory.
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserQuery::ById(id) => &user.id == id,
            UserQuery::ByEmail(email) => &user.email == email,
            UserQuery::ByUserName(name) => &user.username == name,
        }
    }

    /// Log-safe rendering of the query.
    pub fn describe(&self) -> String {
        match self {
            UserQuery::ById(id) => format!("id={}", id),
            UserQuery::ByEmail(email) => format!("email={}", mask_email(email)),
            UserQuery::ByUserName(name) => format!("username={}", mask_username(name)),
        }
    }
}
