//! `UserStore` backed by a MongoDB collection.
//!
//! This is the only module that speaks in documents, filters and update
//! operators; everything above it works with plain domain values.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind as DriverErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::config::Config;
use crate::constants::{DUPLICATE_KEY_CODE, FIELD_EMAIL, FIELD_USERNAME};
use crate::errors::{Error, StoreError};
use crate::models::{NewUser, User, UserID, UserUpdates};
use crate::repositories::{UserQuery, UserStore};
use crate::utils::log_sanitizer::mask_email;

pub struct MongoStore {
    collection: Collection<User>,
    hash_cost: u32,
}

impl MongoStore {
    /// Build on an injected database handle. The handle's client is shared
    /// and safe to use from many tasks at once.
    pub fn new(db: &Database, collection_name: &str, hash_cost: u32) -> Self {
        Self {
            collection: db.collection(collection_name),
            hash_cost,
        }
    }

    pub fn from_config(db: &Database, config: &Config) -> Self {
        Self::new(db, &config.users_collection, config.bcrypt_cost)
    }

    /// Create unique indexes on `email` and `username`.
    ///
    /// These are what make duplicate signups fail: inserts do not look for
    /// an existing record first. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        info!(
            "Ensuring unique indexes on {}.{{{}, {}}}",
            self.collection.name(),
            FIELD_EMAIL,
            FIELD_USERNAME
        );

        let indexes = [FIELD_EMAIL, FIELD_USERNAME].map(|field| {
            let mut keys = doc! {};
            keys.insert(field, 1);
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        });

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Number of stored users.
    pub async fn count(&self) -> Result<u64, Error> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_one(&self, query: UserQuery) -> Result<User, Error> {
        debug!("Finding user by {}", query.describe());
        self.collection
            .find_one(query.filter())
            .await?
            .ok_or(Error::NotFound)
    }
}

/// Map a rejected write to `DuplicateKey` when a unique index caused it.
fn translate_write_error(err: mongodb::error::Error) -> StoreError {
    if let DriverErrorKind::Write(WriteFailure::WriteError(we)) = err.kind.as_ref() {
        if we.code == DUPLICATE_KEY_CODE {
            if let Some(field) = duplicate_field(&we.message) {
                return StoreError::DuplicateKey { field };
            }
        }
    }
    StoreError::Driver(err)
}

/// Pull the offending field out of a server message such as
/// `E11000 duplicate key error collection: db.users index: email_1 dup key: ...`.
fn duplicate_field(message: &str) -> Option<&'static str> {
    [FIELD_EMAIL, FIELD_USERNAME]
        .into_iter()
        .find(|field| message.contains(&format!("index: {}_", field)))
}

#[async_trait]
impl UserStore for MongoStore {
    async fn get_all(&self) -> Result<Vec<User>, Error> {
        debug!("Fetching all users from {}", self.collection.name());
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get_by_id(&self, id: &UserID) -> Result<User, Error> {
        self.find_one(UserQuery::ById(id.clone())).await
    }

    async fn get_by_email(&self, email: &str) -> Result<User, Error> {
        self.find_one(UserQuery::ByEmail(email.to_string())).await
    }

    async fn get_by_username(&self, username: &str) -> Result<User, Error> {
        self.find_one(UserQuery::ByUserName(username.to_string()))
            .await
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, Error> {
        let mut user = new_user.to_user(self.hash_cost)?;
        user.id = UserID::generate();

        debug!("Inserting user {} ({})", user.id, mask_email(&user.email));
        self.collection
            .insert_one(&user)
            .await
            .map_err(translate_write_error)?;

        Ok(user)
    }

    async fn update(&self, updates: &UserUpdates, current: &User) -> Result<(), Error> {
        let filter = UserQuery::ById(current.id.clone()).filter();
        // An empty `$set` still matches on the id, so a missing target is reported.
        let set = updates.to_set_document();
        debug!(
            "Updating user {} fields {:?}",
            current.id,
            set.keys().collect::<Vec<_>>()
        );

        let result = self
            .collection
            .update_one(filter, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::UpdateTargetMissing(current.id.clone()).into());
        }
        Ok(())
    }
}
