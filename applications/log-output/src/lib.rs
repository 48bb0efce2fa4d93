//! Log output
//!
//! Logs a fresh UUIDv7 with a timestamp every few seconds and answers a
//! status line carrying the session id generated at startup.

pub mod config;
pub mod routes;
pub mod ticker;

pub use config::LogOutputConfig;
pub use routes::{create_router, LogState};
pub use ticker::{run_ticker, tick_line};
