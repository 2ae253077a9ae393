//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// An error returned by an API handler.
///
/// The response body is the plain-text error message.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  Internal(String),
}

impl ApiError {
  /// Not-found stays a 404; every other failure is a 500.
  pub fn from_lookup(e: contacts_core::Error) -> Self {
    match e {
      err @ contacts_core::Error::NotFound(_) => Self::NotFound(err.to_string()),
      other => Self::internal(other),
    }
  }

  /// Every failure, including not-found, is a 500.
  pub fn internal(e: impl std::error::Error) -> Self {
    Self::Internal(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, self.to_string()).into_response()
  }
}
