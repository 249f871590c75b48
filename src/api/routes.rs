//! API route configuration.

use crate::api::handlers::{missing_short_id_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Create or fetch the short id for a URL
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
/// - `GET  /shorturl`              - Missing short id (404)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorturl",
            get(missing_short_id_handler).post(shorten_handler),
        )
        .route("/shorturl/{short_url}", get(redirect_handler))
}
