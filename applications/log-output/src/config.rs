/// Log-output configuration
use serde::Deserialize;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Prefix of the environment variables (`LOG_OUTPUT_PORT`, ...)
pub const ENV_PREFIX: &str = "LOG_OUTPUT";

#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(String);

#[derive(Debug, Clone, Deserialize)]
pub struct LogOutputConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds between heartbeat lines
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
}

impl LogOutputConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(&env)
    }

    pub fn load_from(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(
                        env.iter()
                            .map(|(key, value)| (key.clone(), value.clone()))
                            .collect(),
                    )),
            )
            .build()
            .map_err(|e| ConfigError(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError(e.to_string()))?;

        if config.tick_secs == 0 {
            return Err(ConfigError("Tick interval must be non-zero".to_string()));
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ConfigError(format!("Invalid host {:?}: {}", self.host, e)))?;
        Ok(SocketAddr::from((ip, self.port)))
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_tick_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogOutputConfig::load_from(&HashMap::new()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.tick_period(), Duration::from_secs(5));
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_port_from_env() {
        let env = HashMap::from([("LOG_OUTPUT_PORT".to_string(), "3101".to_string())]);
        let config = LogOutputConfig::load_from(&env).unwrap();
        assert_eq!(config.port, 3101);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let env = HashMap::from([("LOG_OUTPUT_TICK_SECS".to_string(), "0".to_string())]);
        assert!(LogOutputConfig::load_from(&env).is_err());
    }
}
