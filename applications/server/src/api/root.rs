/// Versioned API root
use crate::{api::response::Enveloped, state::AppState};
use axum::{extract::State, http::HeaderMap};
use todo_core::RootInfo;

/// GET /api/{version}/ - welcome message and versioned API pointer
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Welcome message and versioned API info, wrapped in the response envelope", body = RootInfo)
    )
)]
pub async fn api_root(State(state): State<AppState>, headers: HeaderMap) -> Enveloped {
    tracing::debug!(
        api_version = %state.info.api_version(),
        user_agent = super::user_agent(&headers),
        "API root route hit"
    );

    let root: RootInfo = state.info.root_info();
    Enveloped::ok(&root)
}
