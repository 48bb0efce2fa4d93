/// Browser configuration script
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
};
use serde_json::Value;
use todo_core::AppInfo;

const JAVASCRIPT_UTF8: &str = "application/javascript; charset=utf-8";

/// GET /config.js - exposes API base URL, versions and session id as `window.APP_CONFIG`
pub async fn config_js(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT_UTF8)),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        render_config_script(&state.info),
    )
}

/// Render the `window.APP_CONFIG` assignment for `info`
pub fn render_config_script(info: &AppInfo) -> String {
    let entries = [
        ("API_URL", info.api_prefix()),
        ("API_VERSION", info.api_version().to_string()),
        ("APP_VERSION", info.app_version().to_string()),
        ("SESSION_ID", info.session_id.to_string()),
    ];

    let body = entries
        .into_iter()
        .map(|(key, value)| format!("  {}: {}", key, js_string(value)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("window.APP_CONFIG = {{\n{}\n}};\n", body)
}

// JSON string literals are valid JavaScript string literals
fn js_string(value: String) -> String {
    Value::String(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{SessionId, VersionInfo};

    #[test]
    fn test_script_contents() {
        let info = AppInfo::with_session(SessionId::new("abc-123"), VersionInfo::new("1.4.2"));
        let script = render_config_script(&info);

        assert!(script.starts_with("window.APP_CONFIG = {"));
        assert!(script.contains("API_URL: \"/api/v1.4\""));
        assert!(script.contains("API_VERSION: \"v1.4\""));
        assert!(script.contains("APP_VERSION: \"1.4.2\""));
        assert!(script.contains("SESSION_ID: \"abc-123\""));
        assert!(script.trim_end().ends_with("};"));
    }

    #[test]
    fn test_values_are_escaped() {
        let info = AppInfo::with_session(
            SessionId::new("\"</script>"),
            VersionInfo::new("1.0.0"),
        );
        let script = render_config_script(&info);

        assert!(script.contains(r#"SESSION_ID: "\"</script>""#));
    }
}
