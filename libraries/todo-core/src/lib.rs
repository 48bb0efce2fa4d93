//! Todo Core
//!
//! Framework-agnostic building blocks shared by the todo demo services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Bootstrap**: `SessionId`, `VersionInfo` and the `AppInfo` bundle built once at startup
//! - **Responses**: the `Envelope` wrapper applied to every JSON API response
//! - **Health**: `HealthSnapshot`, `RootInfo` and the process statistics behind them
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use todo_core::{AppInfo, Envelope, VersionInfo, VersionSources};
//!
//! let version = VersionInfo::resolve(&VersionSources {
//!     override_version: Some("1.4.2".to_string()),
//!     ..VersionSources::default()
//! });
//! assert_eq!(version.api_version, "v1.4");
//!
//! let info = AppInfo::new(version);
//! let envelope = Envelope::wrap(&info.root_info(), 200);
//! assert_eq!(envelope.data["versionedApi"], "/api/v1.4/");
//! ```

#![forbid(unsafe_code)]

pub mod app;
pub mod envelope;
pub mod error;
pub mod health;
pub mod process;
pub mod session;
pub mod version;

pub use app::AppInfo;
pub use envelope::{Envelope, EnvelopeStatus, Pattern};
pub use error::{CoreError, Result};
pub use health::{HealthSnapshot, RootInfo, ServiceStatus};
pub use process::{MemoryUsage, ProcessStats};
pub use session::SessionId;
pub use version::{api_version_for, VersionInfo, VersionSources, DEFAULT_APP_VERSION};
