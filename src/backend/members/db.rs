/**
 * PostgreSQL Member Store
 *
 * Each operation acquires a pooled connection for the duration of one query
 * and returns it when the query future completes or is dropped. Every query
 * is bounded by `query_timeout` on top of the pool's acquire timeout.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

use super::{Member, MemberStore, NewMember, StoreError};

const MEMBER_COLUMNS: &str = "id, first_name, last_name, email, phone, date_of_birth, gender, \
     address, church_role, password_hash, is_active, email_verified, joined_at, created_at, updated_at";

/// Member store over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgMemberStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgMemberStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(map_sqlx_error),
            Err(_) => Err(StoreError::Timeout(self.query_timeout)),
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        StoreError::DuplicateEmail
    } else {
        StoreError::Database(err)
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        let sql = format!("SELECT {} FROM members WHERE email = $1", MEMBER_COLUMNS);
        self.bounded(
            sqlx::query_as::<_, Member>(&sql)
                .bind(email)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError> {
        let sql = format!("SELECT {} FROM members WHERE id = $1", MEMBER_COLUMNS);
        self.bounded(
            sqlx::query_as::<_, Member>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, member: NewMember) -> Result<Member, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO members
                (first_name, last_name, email, phone, date_of_birth, gender, address, church_role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            MEMBER_COLUMNS
        );

        self.bounded(
            sqlx::query_as::<_, Member>(&sql)
                .bind(&member.first_name)
                .bind(&member.last_name)
                .bind(&member.email)
                .bind(&member.phone)
                .bind(member.date_of_birth)
                .bind(member.gender.map(|g| g.as_str()))
                .bind(&member.address)
                .bind(&member.church_role)
                .bind(&member.password_hash)
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError> {
        let result = self
            .bounded(
                sqlx::query("UPDATE members SET is_active = $1, updated_at = $2 WHERE id = $3")
                    .bind(active)
                    .bind(Utc::now())
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }
}
