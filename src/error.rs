use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for every operation the portal exposes.
///
/// All variants surface to the caller as HTTP 400 with a
/// `{"success":false,"error":"..."}` body; the distinction matters to the
/// operations themselves (the gate raises `Unauthenticated`/`Forbidden`,
/// the intake guards raise `Validation`, and so on), not to the wire
/// format. Nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing or invalid credentials")]
    Unauthenticated,

    #[error("Administrator access required")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Unknown rollover type: {0}")]
    InvalidDomain(String),

    #[error("Data service error")]
    Db(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log upstream/internal failures in full, return the sanitized message.
        match &self {
            ApiError::Db(err) => tracing::error!("database error: {err}"),
            ApiError::Internal(msg) => tracing::error!("internal error: {msg}"),
            _ => {}
        }
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

// Convenience `Result` type
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_do_not_leak_upstream_text() {
        let err = ApiError::Db(sea_orm::DbErr::Custom("secret dsn".into()));
        assert_eq!(err.to_string(), "Data service error");
    }

    #[test]
    fn validation_carries_user_facing_message() {
        let err = ApiError::Validation("Nominee name is required".into());
        assert_eq!(err.to_string(), "Nominee name is required");
    }
}
