//! Persistence for a directory of user accounts.
//!
//! [`UserStore`](repositories::UserStore) is the contract callers program
//! against. [`MongoStore`](repositories::MongoStore) implements it on a
//! MongoDB collection and [`MemoryStore`](repositories::MemoryStore) in
//! process memory.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod utils;
pub mod validators;

pub use errors::{Error, ErrorKind, StoreError};
pub use models::{NewUser, User, UserID, UserUpdates};
pub use repositories::{MemoryStore, MongoStore, UserQuery, UserStore};
