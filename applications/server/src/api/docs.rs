/// OpenAPI document for the versioned API
use crate::{api, state::AppState};
use axum::{extract::State, Json};
use todo_core::{AppInfo, HealthSnapshot, MemoryUsage, RootInfo};
use utoipa::openapi::{server::Server, OpenApi as OpenApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "TODO APP API", description = "Todo app API service"),
    paths(api::health::api_health, api::root::api_root),
    components(schemas(HealthSnapshot, MemoryUsage, RootInfo)),
    tags(
        (name = "Health", description = "Server status"),
        (name = "Root", description = "Versioned API root")
    )
)]
pub struct ApiDoc;

/// Build the document for the running version; paths are relative to the
/// single server entry `{base_url}/api/{apiVersion}`.
pub fn build_openapi(info: &AppInfo, base_url: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.info.version = info.api_version().to_string();
    doc.servers = Some(vec![Server::new(format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        info.api_prefix()
    ))]);
    doc
}

/// GET /api-docs
pub async fn openapi_json(State(state): State<AppState>) -> Json<OpenApiDoc> {
    Json(build_openapi(&state.info, &state.config.base_url()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::VersionInfo;

    #[test]
    fn test_document_uses_api_version() {
        let info = AppInfo::new(VersionInfo::new("1.4.2"));
        let doc = build_openapi(&info, "https://todo-app.colasloth.com/");
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["info"]["title"], "TODO APP API");
        assert_eq!(value["info"]["version"], "v1.4");
        assert_eq!(
            value["servers"][0]["url"],
            "https://todo-app.colasloth.com/api/v1.4"
        );
        assert!(value["paths"].get("/health").is_some());
        assert!(value["paths"].get("/").is_some());
        assert!(value["components"]["schemas"].get("HealthSnapshot").is_some());
    }
}
