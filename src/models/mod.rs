//! Domain types flowing through the user store.

pub mod new_user;
pub mod updates;
pub mod user;

pub use new_user::*;
pub use updates::*;
pub use user::*;
