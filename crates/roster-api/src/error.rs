//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The member directory could not supply a snapshot.
  #[error("directory error: {0}")]
  Directory(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn directory<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Directory(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Directory(e) => {
        tracing::error!(error = %e, "member directory unavailable");
        (StatusCode::BAD_GATEWAY, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
