//! Route definitions for the DataJobs HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(datajob_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Data job CRUD and background-process endpoints
fn datajob_routes() -> Router<AppState> {
    Router::new()
        .route("/datajobs", get(handlers::datajob::list_datajobs))
        .route("/datajobs", post(handlers::datajob::create_datajob))
        .route("/datajobs/{id}", get(handlers::datajob::get_datajob))
        .route("/datajobs/{id}", put(handlers::datajob::update_datajob))
        .route("/datajobs/{id}", delete(handlers::datajob::delete_datajob))
        .route(
            "/datajobs/status/{status}",
            get(handlers::datajob::list_datajobs_by_status),
        )
        .route(
            "/datajobs/startProcess/{id}",
            post(handlers::datajob::start_process),
        )
        .route(
            "/datajobs/status/process/{id}",
            get(handlers::datajob::get_process_status),
        )
        .route(
            "/datajobs/results/{id}",
            get(handlers::datajob::get_process_results),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    let headers: Vec<HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();

    cors.allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}
