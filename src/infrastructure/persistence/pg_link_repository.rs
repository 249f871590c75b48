//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link mappings.
///
/// Holds a shared pool; each call checks out a connection (or a transaction)
/// for its own duration only.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the last short id handed out, or 0 on an empty store.
    pub async fn last_issued_id(&self) -> Result<i64, AppError> {
        let last = sqlx::query_scalar::<_, i64>("SELECT last_value FROM link_sequence")
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(last.unwrap_or(0))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_short_id(&self, short_url: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT shorturl, name, created_at
            FROM links
            WHERE shorturl = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT shorturl, name, created_at
            FROM links
            WHERE name = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert(&self, original_url: &str) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        // The row lock on link_sequence serializes concurrent allocators
        // until this transaction ends.
        let next_id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE link_sequence
            SET last_value = last_value + 1
            RETURNING last_value
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let inserted = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (shorturl, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            RETURNING shorturl, name, created_at
            "#,
        )
        .bind(next_id)
        .bind(original_url)
        .fetch_optional(&mut *tx)
        .await?;

        match inserted {
            Some(link) => {
                tx.commit().await?;
                Ok(link)
            }
            None => {
                // Lost the race for this URL; give the id back.
                tx.rollback().await?;
                tracing::debug!(url = %original_url, "mapping inserted concurrently, reusing it");

                self.find_by_url(original_url)
                    .await?
                    .ok_or(AppError::Database(sqlx::Error::RowNotFound))
            }
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
