/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use serde_json::Value;
use todo_core::{AppInfo, VersionInfo};
use todo_server::{config::Environment, create_router, AppState, ServerConfig};
use tower::util::ServiceExt;

/// Application version every test server runs as
pub const TEST_APP_VERSION: &str = "1.4.2";

/// Configuration without rate limiting, in the test environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Test,
        enable_rate_limit: false,
        ..ServerConfig::default()
    }
}

pub fn test_state(config: ServerConfig) -> AppState {
    AppState::new(AppInfo::new(VersionInfo::new(TEST_APP_VERSION)), config)
}

/// Create the full application router for `config`
pub fn create_test_app(config: ServerConfig) -> Router {
    create_router(test_state(config))
}

/// Send a GET request to `uri`
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
