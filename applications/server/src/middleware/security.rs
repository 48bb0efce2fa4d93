/// Security response headers and CORS policy
use crate::config::ServerConfig;
use axum::{
    http::{header, request::Parts, HeaderName, HeaderValue, Method},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

const CDNJS: &str = "https://cdnjs.cloudflare.com";

/// Build the `Content-Security-Policy` value; `connect-src` admits the
/// configured CORS origins.
pub fn content_security_policy(origins: &[String]) -> String {
    let mut connect_src = vec!["'self'".to_string()];
    connect_src.extend(origins.iter().cloned());

    [
        "default-src 'self'".to_string(),
        format!("script-src 'self' 'unsafe-inline' {}", CDNJS),
        format!("style-src 'self' 'unsafe-inline' {}", CDNJS),
        "img-src 'self' data: https: https://validator.swagger.io".to_string(),
        format!("connect-src {}", connect_src.join(" ")),
        format!("font-src 'self' {}", CDNJS),
        "base-uri 'self'".to_string(),
        "form-action 'self'".to_string(),
        "frame-ancestors 'self'".to_string(),
        "object-src 'none'".to_string(),
        "script-src-attr 'none'".to_string(),
        "upgrade-insecure-requests".to_string(),
    ]
    .join("; ")
}

/// Attach the security headers to every response that does not already carry them
pub fn with_security_headers<S>(router: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let csp = HeaderValue::from_str(&content_security_policy(&config.cors_origins))
        .unwrap_or_else(|e| {
            tracing::warn!("Invalid origin in CSP, using 'self' only: {}", e);
            HeaderValue::from_static("default-src 'self'")
        });

    let fixed: [(HeaderName, &'static str); 6] = [
        (
            header::STRICT_TRANSPORT_SECURITY,
            "max-age=31536000; includeSubDomains; preload",
        ),
        (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            "same-origin-allow-popups",
        ),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            "cross-origin",
        ),
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    ];

    let router = fixed.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ))
    });

    router.layer(SetResponseHeaderLayer::if_not_present(
        header::CONTENT_SECURITY_POLICY,
        csp,
    ))
}

/// Whether a browser origin may call the API
pub fn is_origin_allowed(origin: &str, allowed: &[String], development: bool) -> bool {
    if allowed.iter().any(|o| o == origin) {
        return true;
    }
    development && origin.starts_with("http://localhost:")
}

/// CORS layer for the configured origins
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let allowed = Arc::new(config.cors_origins.clone());
    let development = config.environment.is_development();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                let Ok(origin) = origin.to_str() else {
                    return false;
                };
                let ok = is_origin_allowed(origin, &allowed, development);
                if ok {
                    tracing::debug!("CORS allowed: {}", origin);
                } else {
                    tracing::warn!("CORS blocked: {}", origin);
                }
                ok
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(24 * 60 * 60))
}
