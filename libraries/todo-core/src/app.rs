/// Immutable application identity built once at startup
use crate::health::{HealthSnapshot, RootInfo, HEALTHY_MESSAGE};
use crate::process::ProcessStats;
use crate::session::SessionId;
use crate::version::VersionInfo;
use std::time::Instant;

/// Session id, versions and start time of the running process.
///
/// Constructed once and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub session_id: SessionId,
    pub version: VersionInfo,
    pub started_at: Instant,
}

impl AppInfo {
    /// Generate a fresh session id for `version`
    pub fn new(version: VersionInfo) -> Self {
        Self::with_session(SessionId::generate(), version)
    }

    /// Use a known session id (mainly for tests)
    pub fn with_session(session_id: SessionId, version: VersionInfo) -> Self {
        Self {
            session_id,
            version,
            started_at: Instant::now(),
        }
    }

    pub fn app_version(&self) -> &str {
        &self.version.app_version
    }

    pub fn api_version(&self) -> &str {
        &self.version.api_version
    }

    /// `/api/{apiVersion}`
    pub fn api_prefix(&self) -> String {
        self.version.api_prefix()
    }

    /// Sample process stats and build the health payload
    pub fn health_snapshot(&self, endpoints: &[&str]) -> HealthSnapshot {
        let stats = ProcessStats::sample(self.started_at);

        HealthSnapshot {
            message: HEALTHY_MESSAGE.to_string(),
            endpoints: endpoints.iter().map(|e| (*e).to_string()).collect(),
            uptime: stats.uptime,
            memory_usage: stats.memory_usage,
            session_id: self.session_id.to_string(),
            app_version: self.version.app_version.clone(),
            api_version: self.version.api_version.clone(),
        }
    }

    pub fn root_info(&self) -> RootInfo {
        RootInfo::for_api_version(&self.version.api_version)
    }
}
