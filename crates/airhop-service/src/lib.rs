//! Shortest airport itinerary HTTP microservice.
//!
//! The service follows a thin-handler pattern: all routing logic lives in
//! `airhop-lib`, this crate only provides HTTP glue.
//!
//! - [`AppState`]: dataset loaded once at startup, shared via `Arc`
//! - [`health`]: liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`ServiceResponse`]: wrapper for successful responses
//! - [`logging`]: JSON or text structured logging
//! - [`middleware`]: request id extraction/generation
//!
//! # Endpoints
//!
//! - `GET /regular-flights/shortest-route/{source}/{destination}` - shortest
//!   itinerary, optional `with-ground-connections=true` and `hops=N` query
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe

#![deny(warnings)]

pub mod config;
pub mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod request;
mod response;
mod route;
mod state;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use config::ServiceConfig;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_SERVICE_UNAVAILABLE, PROBLEM_UNKNOWN_AIRPORT,
};
pub use request::{RoutePath, RouteQuery, Validate, DEFAULT_HOPS};
pub use response::ServiceResponse;
pub use route::{shortest_route_handler, RouteResponse};
pub use state::{AppState, AppStateError};

/// Build the service router with all endpoints and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/regular-flights/shortest-route/{source}/{destination}",
            get(shortest_route_handler),
        )
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
