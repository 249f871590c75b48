//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between an original URL and its numeric short id.
///
/// Column names in storage keep the historical document shape
/// (`name` for the URL, `shorturl` for the id); see `migrations/`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    #[sqlx(rename = "shorturl")]
    pub short_url: i64,
    #[sqlx(rename = "name")]
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short_url: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_url,
            original_url,
            created_at,
        }
    }
}
