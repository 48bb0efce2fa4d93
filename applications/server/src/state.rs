/// Shared application state
use crate::config::ServerConfig;
use std::sync::Arc;
use todo_core::AppInfo;

/// Application state shared across all handlers.
///
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<AppInfo>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(info: AppInfo, config: ServerConfig) -> Self {
        Self {
            info: Arc::new(info),
            config: Arc::new(config),
        }
    }
}
