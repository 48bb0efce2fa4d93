/// Status routes
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use todo_core::{ServiceStatus, SessionId};
use tower_http::trace::TraceLayer;

#[derive(Debug)]
pub struct LogState {
    pub session_id: SessionId,
    pub port: u16,
}

pub fn create_router(state: Arc<LogState>) -> Router {
    Router::new()
        .route("/", get(root).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - plain-text status line
async fn root(State(state): State<Arc<LogState>>) -> String {
    format!(
        "Server running on port {}. Session ID: {}",
        state.port, state.session_id
    )
}

async fn health() -> Json<ServiceStatus> {
    Json(ServiceStatus::up())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
