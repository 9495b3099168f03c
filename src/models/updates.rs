//! Sparse profile updates.

use mongodb::bson::{doc, Document};
use serde::Deserialize;

use crate::constants::{FIELD_FIRST_NAME, FIELD_LAST_NAME};
use crate::models::User;

/// Fields a caller wants to change. `None` and empty strings leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserUpdates {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserUpdates {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when applying these updates would change nothing.
    pub fn is_empty(&self) -> bool {
        Self::present(&self.first_name).is_none() && Self::present(&self.last_name).is_none()
    }

    /// Body of the `$set` operator: only the fields that carry a value.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(first) = Self::present(&self.first_name) {
            set.insert(FIELD_FIRST_NAME, first);
        }
        if let Some(last) = Self::present(&self.last_name) {
            set.insert(FIELD_LAST_NAME, last);
        }
        set
    }

    /// Merge into an already-loaded user. The id is never touched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(first) = Self::present(&self.first_name) {
            user.first_name = first.to_string();
        }
        if let Some(last) = Self::present(&self.last_name) {
            user.last_name = last.to_string();
        }
    }
}
