//! Crate constants.
//!
//! Collection and document field names live here so the adapters, the
//! serde mappings and the test fixtures all read the same strings.

pub mod collections;
pub mod errors;
pub mod security;

pub use collections::*;
pub use errors::*;
pub use security::*;
