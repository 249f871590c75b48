//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::{FormOrJson, FormOrJsonRejection};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded `url=https%3A%2F%2Fexample.com` or JSON:
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "invalid url"}` if the body is unreadable or the
/// URL is not an absolute http/https URL.
/// Returns 500 `{"error": "An error occurred"}` on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<FormOrJson<ShortenRequest>, FormOrJsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let FormOrJson(payload) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection, "unreadable shorten request body");
        AppError::InvalidUrl
    })?;

    payload.validate().map_err(|_| AppError::InvalidUrl)?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok(Json(link.into()))
}
