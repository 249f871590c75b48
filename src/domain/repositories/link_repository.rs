//! Repository trait for link mapping data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link mappings.
///
/// Every call acquires its own connection from the underlying pool and
/// releases it before returning; implementations keep no per-request state.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the mapping whose short id equals `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_short_id(&self, short_url: i64) -> Result<Option<Link>, AppError>;

    /// Finds the mapping for `original_url`, compared by exact string equality.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Persists a new mapping for `original_url`, allocating the next short id.
    ///
    /// Allocation and insertion happen atomically: the Nth inserted mapping
    /// receives id N, and two concurrent inserts never share an id. If another
    /// request stored the same URL first, that existing mapping is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn insert(&self, original_url: &str) -> Result<Link, AppError>;

    /// Performs a round trip to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
