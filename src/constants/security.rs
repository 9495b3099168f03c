//! Password hashing bounds.

/// Lowest bcrypt cost the hasher accepts.
pub const MIN_HASH_COST: u32 = 4;

/// Highest bcrypt cost the hasher accepts.
pub const MAX_HASH_COST: u32 = 31;
