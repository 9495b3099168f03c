//! The user store contract and its backing implementations.
//!
//! Callers hold something implementing [`UserStore`] and never see storage
//! concepts. [`MongoStore`] is the document-store adapter; [`MemoryStore`]
//! mirrors its observable behaviour without a server.

pub mod memory_store;
pub mod mongo_store;
pub mod query;

pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;
pub use query::UserQuery;

use async_trait::async_trait;

use crate::errors::Error;
use crate::models::{NewUser, User, UserID, UserUpdates};

/// Persistence operations for user accounts.
///
/// Each call is a single round trip to the backing store. Errors are
/// returned as-is; nothing is retried. Uniqueness of email and username is
/// left to the backing store's constraints, not checked before writing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every stored user in storage order. An empty store yields an empty vec.
    async fn get_all(&self) -> Result<Vec<User>, Error>;

    async fn get_by_id(&self, id: &UserID) -> Result<User, Error>;

    /// Exact, case-sensitive match on the email field.
    async fn get_by_email(&self, email: &str) -> Result<User, Error>;

    /// Exact, case-sensitive match on the username field.
    async fn get_by_username(&self, username: &str) -> Result<User, Error>;

    /// Validate and hash `new_user`, assign a fresh id and write it.
    ///
    /// Validation failures return before anything is written.
    async fn insert(&self, new_user: &NewUser) -> Result<User, Error>;

    /// Apply the non-empty fields of `updates` to the stored record with
    /// `current`'s id. `current` itself is not modified or re-read.
    async fn update(&self, updates: &UserUpdates, current: &User) -> Result<(), Error>;
}
