use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Domain errors surfaced by the service and mapped to HTTP statuses.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("inconsistent mapping between route and handler (programmer error)")]
    BadRouting,

    #[error("not found")]
    NotFound,

    #[error("this row is already exists")]
    AlreadyExists,

    #[error("inconsistent IDs")]
    InconsistentIds,

    #[error("role is not administrator")]
    Forbidden,

    #[error("header get authorization")]
    PreconditionRequired,

    /// Store, connection, and serialization failures, wrapped with a
    /// call-site label. Never retried or downgraded.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::AlreadyExists | ServiceError::InconsistentIds => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
            ServiceError::PreconditionRequired => StatusCode::PRECONDITION_REQUIRED,
            ServiceError::BadRouting | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
