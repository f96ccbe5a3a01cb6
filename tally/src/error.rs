use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    /// The document store is not configured or could not be reached.
    /// Surfaced with a fixed message so internals never leak into it.
    #[error("Database not configured")]
    StorageUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for TallyError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            TallyError::StorageUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            TallyError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            TallyError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            TallyError::Aggregation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            TallyError::Json(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            TallyError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
