//! Route planning entry point.
//!
//! [`plan_route`] ties the pieces together:
//! - resolves the requested airport codes through the [`AirportIndex`],
//! - builds the regular flight graph, wrapped with ground transfers when
//!   requested,
//! - runs [`ShortestRouteStrategy`] with the hop policy matching the graph.
//!
//! # Example
//!
//! ```ignore
//! use airhop_lib::{plan_route, CsvDataset, RouteRequest};
//!
//! let dataset = CsvDataset::open("data")?;
//! let plan = plan_route(&index, &routes, &RouteRequest::new("TLL", "RIX"))?;
//! println!("{}", plan.itinerary);
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::airport::Airport;
use crate::connections::{
    ConnectionStrategy, GroundTransferStrategy, RegularFlightsStrategy, DEFAULT_GROUND_DISTANCE_KM,
};
use crate::dataset::RouteRecord;
use crate::directory::AirportIndex;
use crate::error::{Error, Result};
use crate::itinerary::Itinerary;
use crate::search::{HopCounting, Route, RouteOptions, RouteStrategy, ShortestRouteStrategy};

/// Ground transfer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundOptions {
    /// Maximum distance between two airports linked by ground, in km.
    pub max_distance_km: f64,
}

impl Default for GroundOptions {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_GROUND_DISTANCE_KM,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub hops: Option<usize>,
    /// Enables ground transfers when set.
    pub ground: Option<GroundOptions>,
}

impl RouteRequest {
    /// Flights only, no hop budget.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            hops: None,
            ground: None,
        }
    }

    pub fn with_hops(mut self, hops: usize) -> Self {
        self.hops = Some(hops);
        self
    }

    pub fn with_ground(mut self, ground: GroundOptions) -> Self {
        self.ground = Some(ground);
        self
    }

    /// Hop counting matching the graph: ground transfers are free when
    /// ground connections are enabled.
    pub fn hop_counting(&self) -> HopCounting {
        if self.ground.is_some() {
            HopCounting::FlightsOnly
        } else {
            HopCounting::AllStops
        }
    }
}

/// Planned route returned by the library.
///
/// An empty `route` means both airports exist but no itinerary connects them.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub source: Arc<Airport>,
    pub destination: Arc<Airport>,
    pub route: Route,
    pub itinerary: Itinerary,
    /// Airports along the route, ground nodes folded onto their airport.
    pub stops: Vec<Arc<Airport>>,
}

impl RoutePlan {
    pub fn is_found(&self) -> bool {
        self.route.is_found()
    }

    pub fn total_distance(&self) -> f64 {
        self.route.total_distance
    }
}

/// Compute the shortest itinerary for `request`.
///
/// Unknown airport codes fail with [`Error::UnknownAirport`]; an unreachable
/// destination is reported through an empty [`RoutePlan::route`].
pub fn plan_route(
    airports: &Arc<AirportIndex>,
    routes: &Arc<[RouteRecord]>,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let source = resolve(airports, &request.from)?;
    let destination = resolve(airports, &request.to)?;

    let flights = RegularFlightsStrategy::new(Arc::clone(airports), Arc::clone(routes));
    let strategy: Box<dyn ConnectionStrategy> = match request.ground {
        Some(ground) => Box::new(GroundTransferStrategy::new(
            flights,
            ground.max_distance_km,
            Arc::clone(airports),
        )),
        None => Box::new(flights),
    };

    let graph = strategy.build_connections();
    let search = ShortestRouteStrategy::new(graph, request.hop_counting().policy());
    let options = RouteOptions { hops: request.hops };
    let route = search.build_route(source.code(), destination.code(), &options);

    info!(
        from = %source.code(),
        to = %destination.code(),
        found = route.is_found(),
        total_distance = route.total_distance,
        ground = request.ground.is_some(),
        "route planned"
    );

    let itinerary = Itinerary::from_path(&route.path);
    let stops = itinerary
        .stops
        .iter()
        .filter_map(|stop| airports.get(&stop.code).cloned())
        .collect();

    Ok(RoutePlan {
        source,
        destination,
        route,
        itinerary,
        stops,
    })
}

fn resolve(airports: &AirportIndex, code: &str) -> Result<Arc<Airport>> {
    airports
        .get(code.trim())
        .cloned()
        .ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
        })
}
