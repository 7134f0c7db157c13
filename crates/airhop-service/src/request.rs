//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use airhop_lib::{GroundOptions, RouteRequest as LibRequest};

use crate::ProblemDetails;

/// Hop budget used when the query does not set one: five stops, i.e. four
/// legs or three layovers.
pub const DEFAULT_HOPS: usize = 5;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request. The `request_id` populates the `instance` field
    /// of any returned `ProblemDetails`, boxed to keep `Result` small.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Path parameters of the shortest-route endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePath {
    pub source: String,
    pub destination: String,
}

/// Query parameters of the shortest-route endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Ground transfers are enabled only by the exact value `true`.
    #[serde(rename = "with-ground-connections", default)]
    pub with_ground_connections: Option<String>,

    /// Hop budget; `0` means unlimited. Defaults to [`DEFAULT_HOPS`].
    #[serde(default)]
    pub hops: Option<usize>,
}

impl RouteQuery {
    pub fn ground_enabled(&self) -> bool {
        self.with_ground_connections.as_deref() == Some("true")
    }

    pub fn hops(&self) -> usize {
        self.hops.unwrap_or(DEFAULT_HOPS)
    }
}

impl RoutePath {
    /// Convert to a library request, using `ground` when the query enables
    /// ground transfers.
    pub fn to_request(&self, query: &RouteQuery, ground: GroundOptions) -> LibRequest {
        let request =
            LibRequest::new(self.source.trim(), self.destination.trim()).with_hops(query.hops());
        if query.ground_enabled() {
            request.with_ground(ground)
        } else {
            request
        }
    }
}

impl Validate for RoutePath {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.source.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'source' parameter is required and cannot be empty",
                request_id,
            )));
        }

        if self.destination.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'destination' parameter is required and cannot be empty",
                request_id,
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(source: &str, destination: &str) -> RoutePath {
        RoutePath {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_route_path_validation() {
        assert!(path("TLL", "HEL").validate("req-1").is_ok());

        let problem = path(" ", "HEL").validate("req-2").unwrap_err();
        assert_eq!(problem.status, 400);
        assert!(problem.detail.as_deref().unwrap().contains("source"));

        let problem = path("TLL", "").validate("req-3").unwrap_err();
        assert!(problem.detail.as_deref().unwrap().contains("destination"));
    }

    #[test]
    fn test_query_defaults() {
        let query: RouteQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.ground_enabled());
        assert_eq!(query.hops(), DEFAULT_HOPS);
    }

    #[test]
    fn test_ground_requires_literal_true() {
        let query: RouteQuery =
            serde_json::from_str(r#"{"with-ground-connections":"TRUE"}"#).unwrap();
        assert!(!query.ground_enabled());

        let query: RouteQuery =
            serde_json::from_str(r#"{"with-ground-connections":"true","hops":0}"#).unwrap();
        assert!(query.ground_enabled());
        assert_eq!(query.hops(), 0);
    }

    #[test]
    fn test_to_request() {
        let query = RouteQuery {
            with_ground_connections: Some("true".to_string()),
            hops: Some(3),
        };
        let ground = GroundOptions {
            max_distance_km: 42.0,
        };
        let request = path(" TLL", "KUN ").to_request(&query, ground);
        assert_eq!(request.from, "TLL");
        assert_eq!(request.to, "KUN");
        assert_eq!(request.hops, Some(3));
        assert_eq!(request.ground, Some(ground));

        let request = path("TLL", "KUN").to_request(&RouteQuery::default(), ground);
        assert_eq!(request.hops, Some(DEFAULT_HOPS));
        assert!(request.ground.is_none());
    }
}
