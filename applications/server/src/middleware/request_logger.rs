/// Per-request access log
use super::client_ip;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use todo_core::{AppInfo, ProcessStats};

/// Emit one structured log line per completed request.
///
/// Purely observational: the response passes through untouched.
pub async fn request_logger(
    State(info): State<Arc<AppInfo>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let destination = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let source_ip = client_ip(&request).unwrap_or_else(|| "unknown".to_string());
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    tracing::debug!(method = %method, destination = %destination, "→ request");

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let stats = ProcessStats::sample(info.started_at);

    macro_rules! access_log {
        ($level:ident) => {
            tracing::$level!(
                method = %method,
                destination = %destination,
                status,
                latency_ms,
                source_ip = %source_ip,
                user_agent = %user_agent,
                rss = stats.memory_usage.rss,
                uptime_secs = stats.uptime,
                "← request completed"
            )
        };
    }

    if response.status().is_server_error() {
        access_log!(error);
    } else if response.status().is_client_error() {
        access_log!(warn);
    } else {
        access_log!(info);
    }

    response
}
