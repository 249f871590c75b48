//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validation::{is_valid_url, parse_short_id};

/// Service for creating and resolving short links.
///
/// Validates input, short-circuits on already shortened URLs, and delegates
/// id allocation to the repository.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Returns the mapping for `original_url`, creating it if needed.
    ///
    /// The URL is compared and stored exactly as given. Submitting the same
    /// URL again returns the existing mapping without allocating a new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is not an absolute
    /// http/https URL, and [`AppError::Database`] on store failures.
    pub async fn shorten(&self, original_url: &str) -> Result<Link, AppError> {
        if !is_valid_url(original_url) {
            return Err(AppError::InvalidUrl);
        }

        if let Some(existing) = self.link_repository.find_by_url(original_url).await? {
            tracing::debug!(short_url = existing.short_url, "url already shortened");
            return Ok(existing);
        }

        let link = self.link_repository.insert(original_url).await?;
        tracing::info!(short_url = link.short_url, url = %link.original_url, "short url created");

        Ok(link)
    }

    /// Resolves a raw short id path segment to its mapping.
    ///
    /// # Errors
    ///
    /// - [`AppError::WrongFormat`] if the segment is not all digits
    /// - [`AppError::ShortUrlNotFound`] if no mapping carries the id
    /// - [`AppError::Database`] on store failures
    pub async fn resolve(&self, raw_short_id: &str) -> Result<Link, AppError> {
        let Some(short_url) = parse_short_id(raw_short_id)? else {
            return Err(AppError::ShortUrlNotFound);
        };

        self.link_repository
            .find_by_short_id(short_url)
            .await?
            .ok_or(AppError::ShortUrlNotFound)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
