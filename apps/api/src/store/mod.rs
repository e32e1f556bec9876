//! CV Store Gateway and user lookup — the persistence boundary.
//!
//! This service never writes CV rows: the (external) extraction pipeline
//! inserts them, and the enhancement result is returned to the page without
//! being persisted. `load_cv` is idempotent and side-effect-free, so the
//! load phase can call it on every page entry.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::cv::{CvRecord, UserCvRow};
use crate::models::user::User;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Maps an authenticated-subject identifier to the local application user.
/// A subject with no local row is treated as unauthenticated by the caller.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>>;
}

/// The CV Store Gateway: given a local user id, the stored CV record or
/// absence. Failures carry the store's own message — the load phase surfaces
/// it inline rather than failing the request.
#[async_trait]
pub trait CvStore: Send + Sync {
    async fn load_cv(&self, user_id: Uuid) -> Result<Option<CvRecord>>;
}

pub struct PgUserLookup {
    pool: PgPool,
}

impl PgUserLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PgUserLookup {
    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
                .bind(subject)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

pub struct PgCvStore {
    pool: PgPool,
}

impl PgCvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CvStore for PgCvStore {
    async fn load_cv(&self, user_id: Uuid) -> Result<Option<CvRecord>> {
        let row: Option<UserCvRow> = sqlx::query_as(
            "SELECT * FROM user_cvs WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let record = serde_json::from_value::<CvRecord>(row.extracted_cv)
                    .context("stored CV does not match the record shape")?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}
