//! Error types for the health view client.

use thiserror::Error;

/// Errors that can occur while loading the API root and health data.
#[derive(Error, Debug)]
pub enum HealthViewError {
    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, url: String },

    /// Body was not JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The API version could not be read from the `/api` redirect
    #[error("Could not discover API version: {0}")]
    Discovery(String),
}

/// Result type for health view operations.
pub type Result<T> = std::result::Result<T, HealthViewError>;
