//! Todo Server Library
//!
//! Versioned demo API: health and root endpoints in the response envelope,
//! redirects from unversioned paths, browser config script and API docs.
//!
//! This library exposes the router and its parts for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{Environment, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
