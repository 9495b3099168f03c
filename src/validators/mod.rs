//! Custom validators used by the signup payload.

pub mod user;

pub use user::*;
