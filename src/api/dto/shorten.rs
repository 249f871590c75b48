//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// Accepted as a form post or as JSON. A missing `url` field deserializes to
/// an empty string so it fails validation like any other invalid URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::validate_web_url"))]
    pub url: String,
}

/// The stored mapping for the submitted URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_url,
        }
    }
}
