//! Property-based tests for version derivation
//!
//! The API version tag must always be the first two segments of the
//! application version, prefixed with `v`.

use proptest::prelude::*;
use todo_core::{api_version_for, Envelope, EnvelopeStatus, VersionInfo, VersionSources};

proptest! {
    /// Property: "X.Y.Z" always maps to "vX.Y"
    #[test]
    fn api_version_is_major_minor(major in 0u32..1000, minor in 0u32..1000, patch in 0u32..1000) {
        let app_version = format!("{}.{}.{}", major, minor, patch);
        prop_assert_eq!(api_version_for(&app_version), format!("v{}.{}", major, minor));
    }

    /// Property: extra segments and pre-release suffixes never leak into the tag
    #[test]
    fn api_version_ignores_trailing_segments(
        major in 0u32..100,
        minor in 0u32..100,
        rest in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}(-[a-z]{1,6}(\\.[0-9]{1,2})?)?",
    ) {
        let app_version = format!("{}.{}.{}", major, minor, rest);
        prop_assert_eq!(api_version_for(&app_version), format!("v{}.{}", major, minor));
    }

    /// Property: resolved version info always agrees with the derivation
    #[test]
    fn resolved_info_is_consistent(major in 0u32..100, minor in 0u32..100, patch in 0u32..100) {
        let info = VersionInfo::resolve(&VersionSources {
            override_version: Some(format!("{}.{}.{}", major, minor, patch)),
            ..VersionSources::default()
        });

        prop_assert_eq!(info.api_version.clone(), api_version_for(&info.app_version));
        prop_assert_eq!(info.api_prefix(), format!("/api/v{}.{}", major, minor));
    }

    /// Property: envelope status depends only on the status code
    #[test]
    fn envelope_status_threshold(code in 100u16..600) {
        let envelope = Envelope::wrap(&code, code);
        let expected = if code < 300 { EnvelopeStatus::Success } else { EnvelopeStatus::Error };
        prop_assert_eq!(envelope.status, expected);
    }
}
