use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use nav_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Status code and client-facing message.
    ///
    /// Messages never say which credential check failed, and never echo
    /// internal error details.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::InvalidBody(_) => (StatusCode::BAD_REQUEST, "invalid json".into()),
            Self::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid id".into()),
            Self::Store(err) => match err {
                StoreError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
                StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "not found".into()),
                StoreError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".into()),
                StoreError::IdSpaceExhausted => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "id space exhausted".into())
                }
                StoreError::Serialization(_) | StoreError::Io(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "save failed".into())
                }
            },
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected: {self}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
