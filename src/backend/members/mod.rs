/**
 * Member Model and Store
 *
 * This module defines the persisted member record and the `MemberStore`
 * trait handlers use to reach it. The store handle is injected through
 * `AppState`, so handlers never touch a global pool.
 *
 * # Implementations
 *
 * - `PgMemberStore` (`db.rs`) - PostgreSQL through a bounded `sqlx` pool
 * - `InMemoryMemberStore` (`memory.rs`) - process-local, same uniqueness rules
 *
 * # Uniqueness
 *
 * Email is unique across all members. Both implementations report a second
 * insert with an existing email as `StoreError::DuplicateEmail`, which is the
 * backstop for concurrent sign-ups racing past the existence check.
 */

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::shared::member::{Gender, NewMemberInput};

/// PostgreSQL-backed store
pub mod db;

/// In-memory store
pub mod memory;

pub use db::PgMemberStore;
pub use memory::InMemoryMemberStore;

/// Member row as stored in the `members` table
#[derive(Clone, PartialEq, sqlx::FromRow)]
pub struct Member {
    /// Server-assigned identifier, immutable
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique, case-sensitive as stored
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub church_role: String,
    /// bcrypt hash, never returned to clients
    pub password_hash: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("church_role", &self.church_role)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Fields needed to insert a member; the store assigns id and timestamps.
#[derive(Clone, PartialEq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub church_role: String,
    pub password_hash: String,
}

impl NewMember {
    /// Combine a validated payload with the hash of its password.
    /// The raw password is dropped here.
    pub fn new(input: NewMemberInput, password_hash: String) -> Self {
        let NewMemberInput {
            first_name,
            last_name,
            email,
            phone,
            password: _,
            date_of_birth,
            gender,
            address,
            church_role,
        } = input;

        Self {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            gender,
            address,
            church_role,
            password_hash,
        }
    }
}

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint on email rejected the row
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("database query timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Access to persisted members
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError>;

    /// Insert a member, failing with `DuplicateEmail` if the email exists
    async fn insert(&self, member: NewMember) -> Result<Member, StoreError>;

    /// Set the active flag; returns false when no member has this id
    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError>;

    /// Cheap round trip used by the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}
