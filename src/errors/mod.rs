//! Error types surfaced by the user store.
//!
//! Every failure is tagged with one of three kinds (see [`ErrorKind`]) and
//! handed straight back to the caller. Nothing here retries or recovers.

use std::fmt;

use mongodb::error::{ErrorKind as DriverErrorKind, WriteFailure};
use thiserror::Error;
use validator::ValidationErrors;

use crate::constants::{DUPLICATE_KEY_CODE, ERR_INVALID_CREDENTIALS, ERR_USER_NOT_FOUND};
use crate::models::UserID;

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A lookup by id, email or user name matched nothing.
    NotFound,
    /// Signup input was rejected before anything was written.
    Validation,
    /// Connectivity, query or write failure in the backing store.
    Store,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Store => write!(f, "store"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", ERR_USER_NOT_FOUND)]
    NotFound,

    #[error("Validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("{}", ERR_INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound => ErrorKind::NotFound,
            Error::Validation { .. } | Error::Hashing(_) | Error::InvalidCredentials => {
                ErrorKind::Validation
            }
            Error::Store(_) => ErrorKind::Store,
        }
    }

    /// Shorthand for a single validation message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            errors: vec![message.into()],
        }
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        Error::Store(StoreError::Driver(err))
    }
}

impl From<ValidationErrors> for Error {
    fn from(e: ValidationErrors) -> Self {
        let mut errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}: {}", field, e.code))
                })
            })
            .collect();
        // field_errors() iterates a HashMap; keep messages stable for callers.
        errors.sort();
        Error::Validation { errors }
    }
}

/// Failures reported by a backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A unique constraint rejected the write.
    #[error("Duplicate value for unique field '{field}'")]
    DuplicateKey { field: &'static str },

    /// An update addressed an id with no stored document.
    #[error("No user document with id {0}")]
    UpdateTargetMissing(UserID),
}

impl StoreError {
    /// True when the write was rejected by a unique index.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            StoreError::DuplicateKey { .. } => true,
            StoreError::Driver(err) => match err.kind.as_ref() {
                DriverErrorKind::Write(WriteFailure::WriteError(we)) => {
                    we.code == DUPLICATE_KEY_CODE
                }
                _ => false,
            },
            StoreError::UpdateTargetMissing(_) => false,
        }
    }
}
