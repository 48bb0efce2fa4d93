/// Redirects from unversioned convenience paths to the canonical versioned ones
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// GET /api, /api/, /api/health - 302 to the same path under `/api/{version}`
pub async fn to_versioned(State(state): State<AppState>, uri: Uri) -> Response {
    let location = versioned_location(&state.info.api_prefix(), uri.path(), uri.query());
    found(location)
}

/// GET / - 302 to the versioned API root when no static site is served
pub async fn to_api_root(State(state): State<AppState>) -> Response {
    found(state.info.api_prefix())
}

/// Map an unversioned `/api...` path onto `api_prefix`.
///
/// Trailing slashes are dropped and the query string is kept.
pub fn versioned_location(api_prefix: &str, path: &str, query: Option<&str>) -> String {
    let rest = path
        .strip_prefix("/api")
        .unwrap_or(path)
        .trim_end_matches('/');

    let mut location = format!("{}{}", api_prefix, rest);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }
    location
}

fn found(location: String) -> Response {
    tracing::debug!(location = %location, "Redirecting to versioned API");
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
