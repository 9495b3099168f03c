use std::env;

use lazy_static::lazy_static;
use log::warn;

use crate::constants::{COLLECTION_USERS, MAX_HASH_COST, MIN_HASH_COST};

lazy_static! {
    /// Process configuration for the bootstrap binary. Library types never
    /// read this; they take their settings at construction.
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub users_collection: String,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "user_directory".to_string(),
            users_collection: COLLECTION_USERS.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            mongodb_uri: lookup("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: lookup("DATABASE_NAME").unwrap_or(defaults.database_name),
            users_collection: lookup("USERS_COLLECTION").unwrap_or(defaults.users_collection),
            bcrypt_cost: lookup("BCRYPT_COST")
                .map(|raw| parse_cost(&raw, defaults.bcrypt_cost))
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}

fn parse_cost(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(cost) if (MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) => cost,
        _ => {
            warn!(
                "BCRYPT_COST={} is not in {}..={}, using {}",
                raw, MIN_HASH_COST, MAX_HASH_COST, fallback
            );
            fallback
        }
    }
}
