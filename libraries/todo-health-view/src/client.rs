//! HTTP client for the versioned API root and health endpoints.

use crate::error::{HealthViewError, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Fetches `/api/{version}` and `/api/{version}/health` from one server.
///
/// # Example
///
/// ```ignore
/// use todo_health_view::HealthClient;
///
/// let client = HealthClient::new("http://localhost:3000", "v1.4")?;
/// let health = client.fetch_health().await?;
/// println!("{}", health["data"]["sessionId"]);
/// ```
#[derive(Debug, Clone)]
pub struct HealthClient {
    http: Client,
    base_url: String,
    api_version: String,
}

impl HealthClient {
    /// Create a client for `base_url` and `api_version` (`"v1.4"` or `"1.4"`).
    pub fn new(base_url: &str, api_version: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let api_version = api_version.trim();
        if api_version.is_empty() {
            return Err(HealthViewError::InvalidUrl(
                "API version cannot be empty".into(),
            ));
        }
        let api_version = if api_version.starts_with('v') {
            api_version.to_string()
        } else {
            format!("v{}", api_version)
        };

        Ok(Self {
            http: build_http()?,
            base_url,
            api_version,
        })
    }

    /// Create a client for whatever version the server redirects `/api` to.
    pub async fn discover(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = build_http()?;

        let url = format!("{}/api", base_url);
        debug!(url = %url, "Discovering API version");

        let response = http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(HealthViewError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let final_path = response.url().path().to_string();
        let api_version = version_from_path(&final_path).ok_or_else(|| {
            HealthViewError::Discovery(format!("unexpected final path {}", final_path))
        })?;

        debug!(api_version = %api_version, "Discovered API version");

        Ok(Self {
            http,
            base_url,
            api_version,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// `{base}/api/{version}`
    pub fn api_base(&self) -> String {
        format!("{}/api/{}", self.base_url, self.api_version)
    }

    /// GET the versioned API root; returns the full response body.
    pub async fn fetch_root(&self) -> Result<Value> {
        self.get_json(self.api_base()).await
    }

    /// GET the versioned health endpoint; returns the full response body.
    pub async fn fetch_health(&self) -> Result<Value> {
        self.get_json(format!("{}/health", self.api_base())).await
    }

    async fn get_json(&self, url: String) -> Result<Value> {
        debug!(url = %url, "Fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HealthViewError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| HealthViewError::Parse(e.to_string()))
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(HealthViewError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(HealthViewError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }
    Ok(url.to_string())
}

fn build_http() -> Result<Client> {
    Client::builder()
        .user_agent(format!("todo-health-view/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(HealthViewError::Request)
}

/// Extract `v1.4` from a path ending in `/api/v1.4` (trailing slash allowed)
fn version_from_path(path: &str) -> Option<String> {
    let (_, rest) = path.trim_end_matches('/').rsplit_once("/api/")?;
    if rest.starts_with('v') && !rest.contains('/') && rest.len() > 1 {
        Some(rest.to_string())
    } else {
        None
    }
}
