//! Error type and axum `IntoResponse` implementation.
//!
//! Every error is rendered as `{"error": "<message>"}`. Internal failures are
//! logged with their cause and reported to the client only as a generic
//! server error.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

const SERVER_ERROR_MESSAGE: &str = "Erreur serveur";

#[derive(Debug, Error)]
pub enum Error {
  /// No bearer token was presented.
  #[error("unauthorized")]
  Unauthorized,
  /// A token was presented but is malformed, forged, or expired.
  #[error("forbidden")]
  Forbidden,
  #[error("Mot de passe incorrect")]
  InvalidPassword,
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("upload error: {0}")]
  Upload(#[from] std::io::Error),
  #[error("internal error: {0}")]
  Internal(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

impl From<JsonRejection> for Error {
  fn from(rejection: JsonRejection) -> Self {
    Error::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Unauthorized => {
        let mut res = error_body(StatusCode::UNAUTHORIZED, "Unauthorized");
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer"),
        );
        return res;
      }
      Error::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
      Error::InvalidPassword => (StatusCode::UNAUTHORIZED, self.to_string()),
      Error::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      Error::Upload(_) | Error::Internal(_) | Error::Store(_) => {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE.to_string())
      }
    };
    error_body(status, &message)
  }
}

fn error_body(status: StatusCode, message: &str) -> Response {
  (status, Json(json!({ "error": message }))).into_response()
}
