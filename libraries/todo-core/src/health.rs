/// Health and root payloads served by the todo API
use crate::process::MemoryUsage;
use serde::{Deserialize, Serialize};

/// Message reported by every healthy probe
pub const HEALTHY_MESSAGE: &str = "Server is healthy";

/// Plain liveness probe body: `{status: "UP", message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}

impl ServiceStatus {
    /// The only status this service ever reports
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            message: HEALTHY_MESSAGE.to_string(),
        }
    }
}

/// Health snapshot, recomputed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthSnapshot {
    pub message: String,
    pub endpoints: Vec<String>,
    /// Seconds since startup
    pub uptime: f64,
    pub memory_usage: MemoryUsage,
    pub session_id: String,
    pub app_version: String,
    pub api_version: String,
}

/// Welcome payload of the versioned API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RootInfo {
    pub message: String,
    pub endpoints: Vec<String>,
    /// Canonical path of the versioned API, with trailing slash
    pub versioned_api: String,
}

impl RootInfo {
    /// Root payload for `api_version`
    pub fn for_api_version(api_version: &str) -> Self {
        Self {
            message: format!("Welcome to API Root version {}", api_version),
            endpoints: vec!["/".to_string()],
            versioned_api: format!("/api/{}/", api_version),
        }
    }
}
