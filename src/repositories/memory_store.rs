//! In-process `UserStore` with the same observable behaviour as
//! [`MongoStore`](super::MongoStore): storage order is insertion order,
//! email and username are unique, and updating a missing id is an error.

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::constants::{FIELD_EMAIL, FIELD_USERNAME};
use crate::errors::{Error, StoreError};
use crate::models::{NewUser, User, UserID, UserUpdates};
use crate::repositories::{UserQuery, UserStore};

#[derive(Debug)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    hash_cost: u32,
}

impl MemoryStore {
    pub fn new(hash_cost: u32) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            hash_cost,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    async fn find_one(&self, query: UserQuery) -> Result<User, Error> {
        debug!("Finding user by {} in memory", query.describe());
        self.users
            .read()
            .await
            .iter()
            .find(|u| query.matches(u))
            .cloned()
            .ok_or(Error::NotFound)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.read().await.clone())
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
        // Hash outside the lock; bcrypt is slow.
        let mut user = new_user.to_user(self.hash_cost)?;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateKey { field: FIELD_EMAIL }.into());
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateKey {
                field: FIELD_USERNAME,
            }
            .into());
        }

        user.id = UserID::generate();
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, updates: &UserUpdates, current: &User) -> Result<(), Error> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.id == current.id)
            .ok_or_else(|| StoreError::UpdateTargetMissing(current.id.clone()))?;
        updates.apply_to(stored);
        Ok(())
    }
}
