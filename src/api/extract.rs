//! Request body extractor accepting both HTML form posts and JSON.

use axum::{
    Form, Json,
    extract::{FromRequest, Request, rejection::FormRejection, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Deserializes the body as JSON when `Content-Type` is `application/json`
/// (or a `+json` subtype), and as `application/x-www-form-urlencoded`
/// otherwise.
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

/// Rejection produced when neither decoding succeeds.
#[derive(Debug, Error)]
pub enum FormOrJsonRejection {
    #[error("{}", .0.body_text())]
    Json(JsonRejection),
    #[error("{}", .0.body_text())]
    Form(FormRejection),
}

impl IntoResponse for FormOrJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(r) => r.into_response(),
            Self::Form(r) => r.into_response(),
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = FormOrJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(FormOrJsonRejection::Json)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(FormOrJsonRejection::Form)?;
            Ok(Self(value))
        }
    }
}
