//! PostgreSQL member store tests
//!
//! These need a disposable database:
//!
//! ```text
//! TEST_DATABASE_URL=postgres://... cargo test --test postgres_store -- --ignored
//! ```

mod common;

use chrono::NaiveDate;
use church_members::backend::members::{MemberStore, NewMember, StoreError};
use church_members::shared::{Gender, NewMemberInput};
use common::database::TestDatabase;

fn input(email: &str) -> NewMemberInput {
    NewMemberInput {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        phone: Some("+15551234567".to_string()),
        password: "verysecret".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1906, 12, 9),
        gender: Some(Gender::Female),
        address: Some("1 Navy Way".to_string()),
        church_role: "elder".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_insert_and_find() {
    let db = TestDatabase::new().await;
    let store = db.store();

    let member = store
        .insert(NewMember::new(input("grace@example.com"), "$2b$04$hash".to_string()))
        .await
        .unwrap();

    assert!(member.id > 0);
    assert!(member.is_active);
    assert!(!member.email_verified);
    assert_eq!(member.gender.as_deref(), Some("female"));
    assert_eq!(member.church_role, "elder");

    let by_email = store.find_by_email("grace@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, member.id);
    let by_id = store.find_by_id(member.id).await.unwrap().unwrap();
    assert_eq!(by_id.date_of_birth, NaiveDate::from_ymd_opt(1906, 12, 9));

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_email_is_reported() {
    let db = TestDatabase::new().await;
    let store = db.store();

    store
        .insert(NewMember::new(input("dup@example.com"), "hash".to_string()))
        .await
        .unwrap();
    let err = store
        .insert(NewMember::new(input("dup@example.com"), "hash".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateEmail));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_duplicate_signups_store_one_row() {
    let db = TestDatabase::new().await;
    let store = db.store();

    let (a, b) = tokio::join!(
        store.insert(NewMember::new(input("race@example.com"), "hash".to_string())),
        store.insert(NewMember::new(input("race@example.com"), "hash".to_string())),
    );

    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE email = $1")
        .bind("race@example.com")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_set_active_and_ping() {
    let db = TestDatabase::new().await;
    let store = db.store();
    store.ping().await.unwrap();

    let member = store
        .insert(NewMember::new(input("active@example.com"), "hash".to_string()))
        .await
        .unwrap();

    assert!(store.set_active(member.id, false).await.unwrap());
    let reloaded = store.find_by_id(member.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);

    assert!(!store.set_active(member.id + 1000, false).await.unwrap());
}
