/// HTTP middleware
pub mod rate_limit;
pub mod request_logger;
pub mod security;

pub use rate_limit::{rate_limit, RateLimitDecision, RateLimiter};
pub use request_logger::request_logger;
pub use security::{cors_layer, is_origin_allowed, with_security_headers};

use axum::extract::{ConnectInfo, Request};
use std::net::SocketAddr;

/// Best-effort client address.
///
/// One reverse proxy is trusted: its last `X-Forwarded-For` entry wins,
/// otherwise the peer address of the connection is used.
pub fn client_ip(request: &Request) -> Option<String> {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.rsplit(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
