use crate::database::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error type for the HTTP handlers.
///
/// Store failures are logged with their cause and collapse into a 500 carrying
/// a static message, so clients never see driver details. A body that cannot
/// be decoded at all is a 400 in the same JSON shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Store(StoreError::Connection(err)) => {
                tracing::error!(error = %err, "DB connection error");
                (StatusCode::INTERNAL_SERVER_ERROR, "DB connection error".to_string())
            }
            ApiError::Store(StoreError::Query(err)) => {
                tracing::error!(error = %err, "Query error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Query error".to_string())
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request body");
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
