//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page
//! - `POST /api/shorturl`            - Create a short URL
//! - `GET  /api/shorturl/{short_url}` - Redirect to the original URL
//! - `GET  /health`                  - Health check
//! - `/public/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routes and middleware without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served verbatim under `/public`
pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .nest("/api", api::routes::public_routes())
        .route("/health", get(health_handler))
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed, so
/// `/api/shorturl/` is handled like `/api/shorturl`.
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, public_dir))
}
