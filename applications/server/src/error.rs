/// Server error types
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Body message of every 404
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Body message of every 500; details never reach the client
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body message of every 429
pub const TOO_MANY_REQUESTS: &str = "Too many requests, please try again later";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(ref what) => {
                tracing::debug!("Not found: {}", what);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": ROUTE_NOT_FOUND })),
                )
                    .into_response()
            }
            ServerError::RateLimited { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                Json(json!({ "error": TOO_MANY_REQUESTS })),
            )
                .into_response(),
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_SERVER_ERROR })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = ServerError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Route not found" }));
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let response = ServerError::Internal("db password is hunter2".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn test_rate_limited_sets_retry_after() {
        let response = ServerError::RateLimited {
            retry_after_secs: 42,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
        assert_eq!(
            body_json(response).await["error"],
            "Too many requests, please try again later"
        );
    }
}
