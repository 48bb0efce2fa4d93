//! Todo health view
//!
//! Fetches the versioned API root and health endpoints of a todo server and
//! renders both responses as nested tables, either as HTML or as plain text.
//!
//! # Example
//!
//! ```ignore
//! use todo_health_view::{HealthClient, HealthView};
//!
//! let client = HealthClient::discover("http://localhost:3000").await?;
//! let view = HealthView::load(&client).await;
//! println!("{}", view.render_text());
//! ```

#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod table;
pub mod view;

pub use client::HealthClient;
pub use error::{HealthViewError, Result};
pub use table::{render_html, render_text, JsonNode};
pub use view::{HealthView, ViewState};
