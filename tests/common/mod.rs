//! Store properties shared by every `UserStore` implementation.
//!
//! Each check starts from an empty store and panics on the first violation.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use user_directory::{Error, ErrorKind, NewUser, StoreError, UserID, UserStore, UserUpdates};

pub fn signup(name: &str) -> NewUser {
    NewUser {
        email: format!("{name}@example.com"),
        password: "correct-horse".to_string(),
        password_conf: "correct-horse".to_string(),
        username: name.to_string(),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
    }
}

pub async fn check_empty_store(store: &dyn UserStore) {
    let all = store.get_all().await.unwrap();
    assert!(all.is_empty());
}

pub async fn check_round_trip(store: &dyn UserStore) {
    let inserted = store.insert(&signup("ada")).await.unwrap();
    assert!(!inserted.id.is_empty());
    assert!(inserted.authenticate("correct-horse").is_ok());

    let by_id = store.get_by_id(&inserted.id).await.unwrap();
    assert_eq!(by_id, inserted);

    let by_email = store.get_by_email("ada@example.com").await.unwrap();
    assert_eq!(by_email, inserted);

    let by_name = store.get_by_username("ada").await.unwrap();
    assert_eq!(by_name, inserted);

    assert_eq!(store.get_all().await.unwrap(), vec![inserted]);
}

pub async fn check_distinct_ids(store: &dyn UserStore) {
    let mut ids = HashSet::new();
    for i in 0..10 {
        let user = store.insert(&signup(&format!("user{i}"))).await.unwrap();
        assert!(ids.insert(user.id), "id handed out twice");
    }
    assert_eq!(store.get_all().await.unwrap().len(), 10);
}

pub async fn check_insertion_order(store: &dyn UserStore) {
    let names = ["one", "two", "three"];
    for name in names {
        store.insert(&signup(name)).await.unwrap();
    }
    let stored: Vec<String> = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(stored, names);
}

pub async fn check_partial_update(store: &dyn UserStore) {
    let user = store.insert(&signup("grace")).await.unwrap();
    let other = store.insert(&signup("alan")).await.unwrap();

    let updates = UserUpdates {
        first_name: None,
        last_name: Some("Hopper".to_string()),
    };
    store.update(&updates, &user).await.unwrap();

    let reloaded = store.get_by_id(&user.id).await.unwrap();
    let mut expected = user.clone();
    expected.last_name = "Hopper".to_string();
    assert_eq!(reloaded, expected);

    // Neighbouring records stay as they were.
    assert_eq!(store.get_by_id(&other.id).await.unwrap(), other);
}

pub async fn check_empty_update_is_noop(store: &dyn UserStore) {
    let user = store.insert(&signup("linus")).await.unwrap();
    let blank = UserUpdates {
        first_name: Some(String::new()),
        last_name: None,
    };
    store.update(&blank, &user).await.unwrap();
    assert_eq!(store.get_by_id(&user.id).await.unwrap(), user);
}

pub async fn check_update_missing_target(store: &dyn UserStore) {
    let mut ghost = store.insert(&signup("ghost")).await.unwrap();
    ghost.id = UserID::generate();

    let updates = UserUpdates {
        first_name: Some("Casper".to_string()),
        last_name: None,
    };
    let err = store.update(&updates, &ghost).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Store);
    assert!(matches!(
        err,
        Error::Store(StoreError::UpdateTargetMissing(ref id)) if *id == ghost.id
    ));
}

/// An update with nothing to set still reports a missing target.
pub async fn check_empty_update_missing_target(store: &dyn UserStore) {
    let mut ghost = store.insert(&signup("nobody")).await.unwrap();
    ghost.id = UserID::generate();

    let err = store
        .update(&UserUpdates::default(), &ghost)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Store);
    assert!(matches!(
        err,
        Error::Store(StoreError::UpdateTargetMissing(ref id)) if *id == ghost.id
    ));
}

pub async fn check_not_found(store: &dyn UserStore) {
    store.insert(&signup("present")).await.unwrap();

    let err = store.get_by_id(&UserID::generate()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = store.get_by_email("absent@example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = store.get_by_username("absent").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Lookups are exact.
    let err = store.get_by_email("PRESENT@example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

pub async fn check_validation_short_circuit(store: &dyn UserStore) {
    let mut bad = signup("mallory");
    bad.password_conf = "something-else".to_string();

    let err = store.insert(&bad).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(store.get_all().await.unwrap().is_empty());
}

/// Email and username are unique through the backing store's constraint.
pub async fn check_duplicates_rejected(store: &dyn UserStore) {
    let first = store.insert(&signup("dup")).await.unwrap();

    let mut same_email = signup("someone-else");
    same_email.email = first.email.clone();
    let err = store.insert(&same_email).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Store);
    assert!(matches!(
        err,
        Error::Store(StoreError::DuplicateKey { field: "email" })
    ));

    let mut same_name = signup("dup");
    same_name.email = "fresh@example.com".to_string();
    let err = store.insert(&same_name).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Store(StoreError::DuplicateKey { field: "username" })
    ));

    // A failed insert leaves nothing behind.
    assert_eq!(store.get_all().await.unwrap(), vec![first]);
}

/// Two concurrent signups with the same email: exactly one is stored.
pub async fn check_concurrent_duplicate_insert(store: Arc<dyn UserStore>) {
    let tasks: Vec<_> = (0..2)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let mut nu = signup(&format!("racer{i}"));
                nu.email = "race@example.com".to_string();
                store.insert(&nu).await
            })
        })
        .collect();

    let mut ok = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => ok += 1,
            Err(e) => assert!(matches!(e, Error::Store(ref s) if s.is_duplicate_key())),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(store.get_all().await.unwrap().len(), 1);
}
