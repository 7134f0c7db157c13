//! Shortest-route endpoint.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use airhop_lib::{plan_route, Airport, Error as LibError};

use crate::middleware::extract_or_generate_request_id;
use crate::request::{RoutePath, RouteQuery, Validate};
use crate::{from_lib_error, AppState, ProblemDetails, ServiceResponse};

/// Route response returned to the caller.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Airports along the route; ground nodes are not listed. Empty when no
    /// route exists.
    pub path: Vec<Airport>,
    /// Total distance in kilometres; `0` when no route exists.
    pub total_distance: f64,
    /// Itinerary with ` -> ` between flights and ` => ` around ground
    /// transfers.
    pub as_string: String,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(ServiceResponse<RouteResponse>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Handle `GET /regular-flights/shortest-route/{source}/{destination}`.
pub async fn shortest_route_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<RoutePath>, PathRejection>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Response {
    let request_id = extract_or_generate_request_id(&headers);

    let Path(path) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return Response::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return Response::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };

    info!(
        request_id = %request_id,
        source = %path.source,
        destination = %path.destination,
        ground = query.ground_enabled(),
        hops = query.hops(),
        "handling route request"
    );

    if let Err(problem) = path.validate(request_id.as_str()) {
        return Response::Error(*problem);
    }

    let airports = match state.airports() {
        Ok(airports) => airports,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to resolve airports");
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
    };
    if airports.is_empty() {
        warn!(request_id = %request_id, "no airports loaded");
        return Response::Error(ProblemDetails::service_unavailable(
            "No airports are loaded",
            request_id.as_str(),
        ));
    }

    let request = path.to_request(&query, state.ground());
    let plan = match plan_route(&airports, state.routes(), &request) {
        Ok(plan) => plan,
        Err(e) => {
            match &e {
                LibError::UnknownAirport { code } => {
                    info!(request_id = %request_id, code = %code, "unknown airport")
                }
                _ => error!(request_id = %request_id, error = %e, "route planning failed"),
            }
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
    };

    let response = RouteResponse {
        path: plan.stops.iter().map(|airport| Airport::clone(airport)).collect(),
        total_distance: plan.total_distance(),
        as_string: plan.itinerary.to_string(),
    };

    info!(
        request_id = %request_id,
        found = plan.is_found(),
        stops = response.path.len(),
        total_distance = response.total_distance,
        "route computed"
    );

    Response::Success(ServiceResponse::new(response))
}
