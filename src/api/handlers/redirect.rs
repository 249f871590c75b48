//! Handlers for short URL resolution.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Request Flow
///
/// 1. Reject segments that are not all digits or not valid UTF-8 once
///    percent-decoded (400 `Wrong format`)
/// 2. Look up the mapping by id
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 if no mapping carries the id, 500 on store failures.
pub async fn redirect_handler(
    short_url: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(short_url) = short_url.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "undecodable short id segment");
        AppError::WrongFormat
    })?;

    let link = state.link_service.resolve(&short_url).await?;

    tracing::debug!(short_url = link.short_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}

/// Answers a resolve request that carries no short id.
///
/// # Endpoint
///
/// `GET /api/shorturl` (and `/api/shorturl/` after path normalization)
pub async fn missing_short_id_handler() -> AppError {
    AppError::MissingShortId
}
