//! In-memory member store
//!
//! Mirrors the PostgreSQL table semantics: sequential ids starting at 1,
//! server-side timestamps, and a unique email constraint checked atomically
//! under the lock. Used by tests and for running the router without a
//! database.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use super::{Member, MemberStore, NewMember, StoreError};

#[derive(Default)]
struct Inner {
    next_id: i64,
    members: Vec<Member>,
}

/// Member store kept in process memory
#[derive(Default)]
pub struct InMemoryMemberStore {
    inner: Mutex<Inner>,
    unavailable: AtomicBool,
    timing_out: AtomicBool,
    hide_from_email_lookup: AtomicBool,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the pool timed out
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make every subsequent operation fail as if its query timed out
    pub fn set_timing_out(&self, timing_out: bool) {
        self.timing_out.store(timing_out, Ordering::SeqCst);
    }

    /// Make `find_by_email` report no match while `insert` still enforces
    /// uniqueness, as when a concurrent sign-up commits between the two calls
    pub fn set_hide_from_email_lookup(&self, hide: bool) {
        self.hide_from_email_lookup.store(hide, Ordering::SeqCst);
    }

    /// Remove a member out of band, as an administrator might
    pub fn remove(&self, id: i64) -> bool {
        let mut inner = self.lock();
        let before = inner.members.len();
        inner.members.retain(|m| m.id != id);
        inner.members.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        if self.timing_out.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout(Duration::from_secs(10)));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        self.check_available()?;
        if self.hide_from_email_lookup.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.lock().members.iter().find(|m| m.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError> {
        self.check_available()?;
        Ok(self.lock().members.iter().find(|m| m.id == id).cloned())
    }

    async fn insert(&self, member: NewMember) -> Result<Member, StoreError> {
        self.check_available()?;
        let mut inner = self.lock();

        if inner.members.iter().any(|m| m.email == member.email) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let stored = Member {
            id: inner.next_id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            date_of_birth: member.date_of_birth,
            gender: member.gender.map(|g| g.as_str().to_string()),
            address: member.address,
            church_role: member.church_role,
            password_hash: member.password_hash,
            is_active: true,
            email_verified: false,
            joined_at: now,
            created_at: now,
            updated_at: now,
        };
        inner.members.push(stored.clone());

        Ok(stored)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut inner = self.lock();

        match inner.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.is_active = active;
                member.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::member::DEFAULT_CHURCH_ROLE;

    fn new_member(email: &str) -> NewMember {
        NewMember {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            phone: None,
            date_of_birth: None,
            gender: None,
            address: None,
            church_role: DEFAULT_CHURCH_ROLE.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_defaults() {
        let store = InMemoryMemberStore::new();
        let first = store.insert(new_member("a@example.com")).await.unwrap();
        let second = store.insert(new_member("b@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.is_active);
        assert!(!first.email_verified);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryMemberStore::new();
        store.insert(new_member("a@example.com")).await.unwrap();

        let err = store.insert(new_member("a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let store = InMemoryMemberStore::new();
        store.insert(new_member("Ada@example.com")).await.unwrap();

        assert!(store.find_by_email("Ada@example.com").await.unwrap().is_some());
        assert!(store.find_by_email("ada@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_active_and_remove() {
        let store = InMemoryMemberStore::new();
        let member = store.insert(new_member("a@example.com")).await.unwrap();

        assert!(store.set_active(member.id, false).await.unwrap());
        assert!(!store.find_by_id(member.id).await.unwrap().unwrap().is_active);
        assert!(!store.set_active(99, false).await.unwrap());

        assert!(store.remove(member.id));
        assert!(store.find_by_id(member.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = InMemoryMemberStore::new();
        store.set_unavailable(true);

        assert!(matches!(store.ping().await, Err(StoreError::Database(_))));
        assert!(store.find_by_email("a@example.com").await.is_err());
        assert!(store.insert(new_member("a@example.com")).await.is_err());

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn timing_out_store_reports_timeout() {
        let store = InMemoryMemberStore::new();
        store.set_timing_out(true);

        assert!(matches!(store.ping().await, Err(StoreError::Timeout(_))));
        assert!(matches!(
            store.find_by_id(1).await,
            Err(StoreError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn hidden_lookup_still_enforces_uniqueness() {
        let store = InMemoryMemberStore::new();
        store.insert(new_member("a@example.com")).await.unwrap();
        store.set_hide_from_email_lookup(true);

        assert!(store.find_by_email("a@example.com").await.unwrap().is_none());
        let err = store.insert(new_member("a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }
}
