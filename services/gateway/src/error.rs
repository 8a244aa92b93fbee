use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::QueryError;

/// Central error type for the API
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Query(err) => {
                let status = match err {
                    QueryError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
                    QueryError::EmptyDataset { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    QueryError::NumericOverflow { .. } => {
                        tracing::error!(error = %err, "Aggregate overflowed portable range");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string(), err.code())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
        };

        let body = Json(json!({
            "status": "error",
            "code": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::from(QueryError::invalid_parameter("limit", "0", "limit must be between 1 and 100")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(QueryError::empty_dataset("summary KPIs")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::from(QueryError::NumericOverflow { value: "1".into() }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::NotFound("/nope".into()), StatusCode::NOT_FOUND),
            (
                AppError::BadRequest("Failed to deserialize query string".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
