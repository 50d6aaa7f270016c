use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation(Vec<String>),
    Internal(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// This is how we control what users see when errors occur
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized: No token provided")
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden: Invalid token"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Dish not found"),
            ApiError::Validation(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "errors": errors
                    })),
                )
                    .into_response();
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(serde_json::json!({
              "message": message
            })),
        )
            .into_response()
    }
}

/// Failures while reading or rewriting the persisted catalog.
#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "storage I/O failed: {}", e),
            PersistenceError::Serde(e) => write!(f, "storage (de)serialization failed: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Serde(e)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(e: PersistenceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
