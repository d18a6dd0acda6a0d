//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders the same envelope:
//! `{"success": false, "error": <status>, "message": "..."}`.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn public_message(&self) -> &'static str {
    match self {
      ApiError::NotFound(_) => "resource not found",
      ApiError::Unprocessable(_) => "unprocessable",
      ApiError::MethodNotAllowed => "method not allowed",
      ApiError::Internal(_) => "internal server error",
    }
  }

  /// Wrap a store failure on a read path.
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Internal(Box::new(e))
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Unprocessable(rejection.body_text())
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::Unprocessable(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::NotFound(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    match &self {
      ApiError::Internal(e) => tracing::error!(error = %e, "request failed"),
      other => tracing::debug!(error = %other, "request rejected"),
    }
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.public_message(),
    });
    (status, Json(body)).into_response()
  }
}
