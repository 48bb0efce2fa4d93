/// API route modules
pub mod client_config;
pub mod docs;
pub mod health;
pub mod redirect;
pub mod response;
pub mod root;

use crate::error::ServerError;
use axum::http::{header::USER_AGENT, HeaderMap, Uri};

/// Fallback for every unmatched route
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

/// User agent of a request for log lines, `-` when absent or not text
pub(crate) fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}
