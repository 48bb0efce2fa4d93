//! Application and API version resolution.
//!
//! The application version comes from the first usable source in priority
//! order: explicit override, version file, embedded package version, and
//! finally [`DEFAULT_APP_VERSION`]. The API version tag is always derived
//! from it and is never configured on its own.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version used when no source yields a value
pub const DEFAULT_APP_VERSION: &str = "0.0.0";

/// Candidate sources for the application version, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct VersionSources {
    /// Explicit override, usually the `APP_VERSION` environment variable
    pub override_version: Option<String>,
    /// Plain-text version file read once at startup
    pub version_file: Option<PathBuf>,
    /// Version compiled into the binary
    pub embedded_version: Option<String>,
}

/// Immutable `{appVersion, apiVersion}` pair computed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Full application version, e.g. `1.4.2`
    pub app_version: String,
    /// Coarse API tag, e.g. `v1.4`
    pub api_version: String,
}

impl VersionInfo {
    /// Build version info from a known application version
    pub fn new(app_version: impl Into<String>) -> Self {
        let app_version = app_version.into();
        let api_version = api_version_for(&app_version);
        Self {
            app_version,
            api_version,
        }
    }

    /// Resolve the application version from `sources`.
    ///
    /// Never fails: unreadable or empty sources are skipped and the
    /// hardcoded default is used as a last resort.
    pub fn resolve(sources: &VersionSources) -> Self {
        if let Some(version) = sources.override_version.as_deref().and_then(non_empty) {
            tracing::debug!(version = %version, "Using version override");
            return Self::new(version);
        }

        if let Some(path) = &sources.version_file {
            match read_version_file(path) {
                Ok(Some(version)) => {
                    tracing::debug!(path = %path.display(), version = %version, "Using version file");
                    return Self::new(version);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to read version file: {}", e);
                }
            }
        }

        if let Some(version) = sources.embedded_version.as_deref().and_then(non_empty) {
            return Self::new(version);
        }

        tracing::warn!("No version source available, falling back to {}", DEFAULT_APP_VERSION);
        Self::new(DEFAULT_APP_VERSION)
    }

    /// Canonical path prefix for the versioned API, e.g. `/api/v1.4`
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }
}

/// Read and trim a version file.
///
/// A missing or blank file yields `Ok(None)`.
pub fn read_version_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(non_empty(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Derive the `vMAJOR.MINOR` tag from an application version.
///
/// Takes the first two dot-separated segments; a leading `v` is ignored.
pub fn api_version_for(app_version: &str) -> String {
    let trimmed = app_version.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let major_minor: Vec<&str> = bare.split('.').take(2).collect();
    format!("v{}", major_minor.join("."))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn version_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_api_version_truncates_to_major_minor() {
        assert_eq!(api_version_for("1.4.2"), "v1.4");
        assert_eq!(api_version_for("10.20.30.40"), "v10.20");
        assert_eq!(api_version_for("1.4.2-beta.1"), "v1.4");
    }

    #[test]
    fn test_api_version_short_versions() {
        assert_eq!(api_version_for("2"), "v2");
        assert_eq!(api_version_for("2.7"), "v2.7");
    }

    #[test]
    fn test_api_version_ignores_leading_v() {
        assert_eq!(api_version_for("v1.4.2"), "v1.4");
        assert_eq!(api_version_for("V3.0.1"), "v3.0");
    }

    #[test]
    fn test_override_wins() {
        let file = version_file("2.0.0\n");
        let info = VersionInfo::resolve(&VersionSources {
            override_version: Some("1.4.2".to_string()),
            version_file: Some(file.path().to_path_buf()),
            embedded_version: Some("9.9.9".to_string()),
        });

        assert_eq!(info.app_version, "1.4.2");
        assert_eq!(info.api_version, "v1.4");
    }

    #[test]
    fn test_version_file_is_trimmed() {
        let file = version_file("  1.4.4\n\n");
        let info = VersionInfo::resolve(&VersionSources {
            override_version: None,
            version_file: Some(file.path().to_path_buf()),
            embedded_version: Some("9.9.9".to_string()),
        });

        assert_eq!(info.app_version, "1.4.4");
        assert_eq!(info.api_version, "v1.4");
    }

    #[test]
    fn test_blank_override_falls_through() {
        let file = version_file("3.1.0");
        let info = VersionInfo::resolve(&VersionSources {
            override_version: Some("   ".to_string()),
            version_file: Some(file.path().to_path_buf()),
            embedded_version: None,
        });

        assert_eq!(info.app_version, "3.1.0");
    }

    #[test]
    fn test_missing_file_uses_embedded_version() {
        let dir = tempfile::tempdir().unwrap();
        let info = VersionInfo::resolve(&VersionSources {
            override_version: None,
            version_file: Some(dir.path().join("VERSION")),
            embedded_version: Some("0.7.1".to_string()),
        });

        assert_eq!(info.app_version, "0.7.1");
        assert_eq!(info.api_version, "v0.7");
    }

    #[test]
    fn test_unreadable_file_does_not_fail() {
        // A directory cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let info = VersionInfo::resolve(&VersionSources {
            override_version: None,
            version_file: Some(dir.path().to_path_buf()),
            embedded_version: None,
        });

        assert_eq!(info.app_version, DEFAULT_APP_VERSION);
        assert_eq!(info.api_version, "v0.0");
    }

    #[test]
    fn test_no_sources_uses_default() {
        let info = VersionInfo::resolve(&VersionSources::default());
        assert_eq!(info.app_version, "0.0.0");
        assert_eq!(info.api_prefix(), "/api/v0.0");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(VersionInfo::new("1.4.2")).unwrap();
        assert_eq!(value["appVersion"], "1.4.2");
        assert_eq!(value["apiVersion"], "v1.4");
    }
}
