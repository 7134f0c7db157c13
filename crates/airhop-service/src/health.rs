//! Health check handlers for Kubernetes probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// Number of airports loaded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airports_loaded: Option<usize>,

    /// Number of direct routes loaded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_loaded: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            routes_loaded: None,
        }
    }

    pub fn ready(service: &str, version: &str, airports: usize, routes: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: Some(airports),
            routes_loaded: Some(routes),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            routes_loaded: None,
        }
    }
}

/// Liveness probe handler. Does not depend on the dataset.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"airhop-service","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler: 503 until at least one airport is loaded.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let airports = state.airports().map(|index| index.len()).unwrap_or(0);
    if airports == 0 {
        let status = HealthStatus::not_ready(service, version, "no airports loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, airports, state.routes().len());
    (StatusCode::OK, Json(status)).into_response()
}
