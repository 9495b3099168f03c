//! Collection and document field names.

/// Default collection holding one document per user.
pub const COLLECTION_USERS: &str = "users";

// Document fields. `User`'s serde attributes must use these exact strings.
pub const FIELD_ID: &str = "_id";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASS_HASH: &str = "passhash";
pub const FIELD_FIRST_NAME: &str = "firstname";
pub const FIELD_LAST_NAME: &str = "lastname";

/// Server error code reported when a unique index rejects a write.
pub const DUPLICATE_KEY_CODE: i32 = 11000;
