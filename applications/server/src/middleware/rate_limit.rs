/// Per-client request ceiling for the `/api` tree
use super::client_ip;
use crate::{config::ServerConfig, error::ServerError};
use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

/// Fixed-window counter keyed by client address
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    state: Mutex<LimiterState>,
}

#[derive(Debug)]
struct LimiterState {
    clients: HashMap<String, Window>,
    last_sweep: Instant,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            state: Mutex::new(LimiterState {
                clients: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Duration::from_secs(config.rate_limit_window_secs),
            config.rate_limit_max_requests,
        )
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Count one request for `client`
    pub async fn check(&self, client: &str) -> RateLimitDecision {
        self.check_at(client, Instant::now()).await
    }

    async fn check_at(&self, client: &str, now: Instant) -> RateLimitDecision {
        let mut state = self.state.lock().await;

        // Expired windows are dropped once per window
        if now.duration_since(state.last_sweep) >= self.window {
            let window = self.window;
            state
                .clients
                .retain(|_, w| now.duration_since(w.started) < window);
            state.last_sweep = now;
        }

        let entry = state.clients.entry(client.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started);
            return RateLimitDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        entry.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }

    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.state.lock().await.clients.len()
    }
}

/// Whether `path` belongs to the `/api` tree
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Middleware enforcing the limiter on `/api` paths
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if !is_api_path(request.uri().path()) {
        return next.run(request).await;
    }

    let client = client_ip(&request).unwrap_or_else(|| "unknown".to_string());

    match limiter.check(&client).await {
        RateLimitDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert("ratelimit-limit", HeaderValue::from(limiter.max_requests()));
            headers.insert("ratelimit-remaining", HeaderValue::from(remaining));
            response
        }
        RateLimitDecision::Limited { retry_after } => {
            tracing::warn!(client = %client, "Rate limit exceeded");
            // Round up so clients never retry early
            let retry_after_secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            ServerError::RateLimited { retry_after_secs }.into_response()
        }
    }
}
