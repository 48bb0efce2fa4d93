/// Process-lifetime session identifier
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Time-ordered token generated once at startup.
///
/// Only used for display and debugging; never for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUIDv7 session id
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
