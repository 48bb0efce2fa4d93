/// Route table and middleware stack
use crate::{
    api,
    error::ServerError,
    middleware::{self, RateLimiter},
    state::AppState,
};
use axum::{
    handler::{Handler, HandlerWithoutStateExt},
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Routes served under `/api/{version}`, relative to that prefix.
///
/// Each one also answers at `/api{path}` with a redirect to its versioned path.
fn versioned_endpoints() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        ("", get_only(api::root::api_root)),
        ("/", get_only(api::root::api_root)),
        ("/health", get_only(api::health::api_health)),
    ]
}

/// GET route whose other methods fall through to the JSON 404
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(api::not_found)
}

/// Build the complete application
pub fn create_router(state: AppState) -> Router {
    let routes = routes(&state);
    with_middleware(routes, &state)
}

fn routes(state: &AppState) -> Router {
    let prefix = state.info.api_prefix();

    let mut router = Router::new()
        .route("/health", get_only(api::health::service_health))
        .route("/config.js", get_only(api::client_config::config_js));

    for (path, handler) in versioned_endpoints() {
        router = router
            .route(&format!("{}{}", prefix, path), handler)
            .route(&format!("/api{}", path), get_only(api::redirect::to_versioned));
    }

    if state.config.enable_swagger {
        router = router.route("/api-docs", get_only(api::docs::openapi_json));
    }

    let router = match &state.config.static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {:?}", dir);
            router.fallback_service(
                ServeDir::new(dir)
                    .call_fallback_on_method_not_allowed(true)
                    .not_found_service(api::not_found.into_service()),
            )
        }
        None => router
            .route("/", get_only(api::redirect::to_api_root))
            .fallback(api::not_found),
    };

    router.with_state(state.clone())
}

/// Wrap `router` in the cross-cutting layers, innermost first:
/// body limit, panic catcher, rate limit, security headers, CORS, access log, trace.
pub fn with_middleware(router: Router, state: &AppState) -> Router {
    let config = &state.config;

    let mut router = router
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(CatchPanicLayer::custom(panic_response));

    if config.enable_rate_limit {
        let limiter = Arc::new(RateLimiter::from_config(config));
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit,
        ));
    }

    middleware::with_security_headers(router, config)
        .layer(middleware::cors_layer(config))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state.info),
            middleware::request_logger,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ServerError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
