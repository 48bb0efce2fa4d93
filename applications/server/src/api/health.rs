/// Health check API routes
use crate::{api::response::Enveloped, state::AppState};
use axum::{extract::State, http::HeaderMap, Json};
use todo_core::{HealthSnapshot, ServiceStatus};

/// GET /health - plain liveness probe
pub async fn service_health() -> Json<ServiceStatus> {
    Json(ServiceStatus::up())
}

/// GET /api/{version}/health - health snapshot in the response envelope
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server status, uptime, memory usage and version info, wrapped in the response envelope", body = HealthSnapshot)
    )
)]
pub async fn api_health(State(state): State<AppState>, headers: HeaderMap) -> Enveloped {
    tracing::debug!(
        api_version = %state.info.api_version(),
        user_agent = super::user_agent(&headers),
        "API health route hit"
    );

    let snapshot: HealthSnapshot = state.info.health_snapshot(&["/health"]);
    Enveloped::ok(&snapshot)
}
