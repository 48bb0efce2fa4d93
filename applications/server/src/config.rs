/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use todo_core::VersionSources;

/// Optional configuration file, read from the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// Prefix of the server's own environment variables (`TODO_PORT`, ...)
pub const ENV_PREFIX: &str = "TODO";

/// Consolidated server options.
///
/// Swagger, rate limiting, static files and CORS origins are all
/// switched here rather than by separate entry points.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// Explicit application version (`APP_VERSION`)
    #[serde(default)]
    pub app_version: Option<String>,

    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// Public base URL used in the generated API docs (`BASE_URL`)
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_enabled")]
    pub enable_swagger: bool,

    #[serde(default = "default_enabled")]
    pub enable_rate_limit: bool,

    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,

    #[serde(default = "default_rate_limit_max_requests")]
    pub rate_limit_max_requests: u32,

    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

/// Deployment environment (`NODE_ENV`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` and the process environment
    pub fn load() -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(Path::new(CONFIG_FILE), &env)
    }

    /// Load configuration from `config_path` (if it exists) and `env`.
    ///
    /// `TODO_*` variables map onto fields by name; the deployment-wide
    /// `NODE_ENV`, `APP_VERSION` and `BASE_URL` variables override last.
    pub fn load_from(config_path: &Path, env: &HashMap<String, String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_origins")
                .source(Some(
                    env.iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect(),
                )),
        );

        let well_known = |name: &str| {
            env.get(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        settings = settings
            .set_override_option("environment", well_known("NODE_ENV"))
            .and_then(|s| s.set_override_option("app_version", well_known("APP_VERSION")))
            .and_then(|s| s.set_override_option("base_url", well_known("BASE_URL")))
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.body_limit_bytes == 0 {
            return Err(ServerError::Config(
                "Body limit must be non-zero (set TODO_BODY_LIMIT_BYTES)".to_string(),
            ));
        }

        if self.enable_rate_limit
            && (self.rate_limit_max_requests == 0 || self.rate_limit_window_secs == 0)
        {
            return Err(ServerError::Config(
                "Rate limit window and request ceiling must be non-zero".to_string(),
            ));
        }

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Static directory not found at {:?}",
                    dir
                )));
            }
        }

        Ok(())
    }

    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid host {:?}: {}", self.host, e)))?;
        Ok(SocketAddr::from((ip, self.port)))
    }

    /// Public base URL, defaulting to localhost on the configured port
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }

    /// Version sources in resolution order
    pub fn version_sources(&self) -> VersionSources {
        VersionSources {
            override_version: self.app_version.clone(),
            version_file: Some(self.version_file.clone()),
            embedded_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_version_file() -> PathBuf {
    PathBuf::from("VERSION")
}

fn default_enabled() -> bool {
    true
}

fn default_rate_limit_window_secs() -> u64 {
    15 * 60
}

fn default_rate_limit_max_requests() -> u32 {
    100
}

fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:5173",
        "http://localhost:3000",
        "http://localhost:3001",
        "http://localhost:3002",
        "http://localhost",
        "http://todo-page.colasloth.com",
        "https://todo-page.colasloth.com",
        "http://todo-app.colasloth.com",
        "https://todo-app.colasloth.com",
    ]
    .iter()
    .map(|origin| (*origin).to_string())
    .collect()
}

fn default_body_limit_bytes() -> usize {
    10 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            app_version: None,
            version_file: default_version_file(),
            base_url: None,
            enable_swagger: default_enabled(),
            enable_rate_limit: default_enabled(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            rate_limit_max_requests: default_rate_limit_max_requests(),
            static_dir: None,
            cors_origins: default_cors_origins(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}
