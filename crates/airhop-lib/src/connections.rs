//! Connection strategies producing [`ConnectionGraph`]s.
//!
//! - [`RegularFlightsStrategy`] turns the airport set and the direct route
//!   list into a graph whose edges are flights weighted by distance.
//! - [`GroundTransferStrategy`] decorates any other strategy and adds ground
//!   nodes linking airports that are close enough to travel between by land.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::airport::{Airport, DistanceMetric, Haversine, UNKNOWN_CODE};
use crate::dataset::RouteRecord;
use crate::directory::AirportIndex;
use crate::graph::{ground_code, ConnectionGraph, GraphBuilder};

/// Default radius for ground transfers, in kilometres.
pub const DEFAULT_GROUND_DISTANCE_KM: f64 = 100.0;

/// Anything able to produce a connection graph.
pub trait ConnectionStrategy: Send + Sync {
    fn build_connections(&self) -> ConnectionGraph;
}

impl<S: ConnectionStrategy + ?Sized> ConnectionStrategy for Box<S> {
    fn build_connections(&self) -> ConnectionGraph {
        (**self).build_connections()
    }
}

/// Graph of direct flights between known airports.
///
/// Every airport owning its code becomes a node, even with no outgoing
/// flights. When two airports share a code the first one loaded is the node
/// and edge weights use its coordinates. Routes whose endpoints cannot be
/// resolved are dropped. When several routes share the same endpoints the
/// later one wins.
pub struct RegularFlightsStrategy {
    airports: Arc<AirportIndex>,
    routes: Arc<[RouteRecord]>,
    metric: Arc<dyn DistanceMetric>,
}

impl RegularFlightsStrategy {
    pub fn new(airports: Arc<AirportIndex>, routes: Arc<[RouteRecord]>) -> Self {
        Self::with_metric(airports, routes, Arc::new(Haversine))
    }

    pub fn with_metric(
        airports: Arc<AirportIndex>,
        routes: Arc<[RouteRecord]>,
        metric: Arc<dyn DistanceMetric>,
    ) -> Self {
        Self {
            airports,
            routes,
            metric,
        }
    }
}

impl ConnectionStrategy for RegularFlightsStrategy {
    fn build_connections(&self) -> ConnectionGraph {
        let routes_by_source = group_by(self.routes.iter(), |route| route.source_code.as_str());

        let mut builder = GraphBuilder::new();
        let mut dropped = 0usize;

        for airport in self.airports.graph_airports() {
            builder.insert_node(airport.code());

            // A route may name its source by any code the airport is known under.
            let outgoing = source_codes(airport)
                .into_iter()
                .filter_map(|code| routes_by_source.get(code))
                .flatten();

            for route in outgoing {
                match self.airports.resolve_node(&route.destination_code) {
                    Some(destination) => {
                        let distance = airport.distance_to(destination, self.metric.as_ref());
                        builder.insert_edge(airport.code(), destination.code(), distance);
                    }
                    None => dropped += 1,
                }
            }
        }

        let graph = builder.build();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped_routes = dropped,
            "built regular flight connections"
        );
        graph
    }
}

/// Adds ground transfers between airports within `max_distance_km` of each
/// other on top of another strategy's graph.
///
/// For each such pair the airports are linked to their own ground node at
/// weight zero (both directions) and the two ground nodes are linked to each
/// other at the distance between the airports (both directions). Existing
/// edges of the wrapped graph are preserved.
pub struct GroundTransferStrategy<S> {
    inner: S,
    max_distance_km: f64,
    airports: Arc<AirportIndex>,
    metric: Arc<dyn DistanceMetric>,
}

impl<S: ConnectionStrategy> GroundTransferStrategy<S> {
    pub fn new(inner: S, max_distance_km: f64, airports: Arc<AirportIndex>) -> Self {
        Self::with_metric(inner, max_distance_km, airports, Arc::new(Haversine))
    }

    pub fn with_metric(
        inner: S,
        max_distance_km: f64,
        airports: Arc<AirportIndex>,
        metric: Arc<dyn DistanceMetric>,
    ) -> Self {
        Self {
            inner,
            max_distance_km,
            airports,
            metric,
        }
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }
}

impl<S: ConnectionStrategy> ConnectionStrategy for GroundTransferStrategy<S> {
    fn build_connections(&self) -> ConnectionGraph {
        let base = self.inner.build_connections();
        let mut builder = base.to_builder();

        let candidates: Vec<&Airport> = unique_by_id(self.airports.graph_airports())
            .filter(|airport| !airport.has_unknown_code())
            .collect();

        let mut transfers = 0usize;
        for (i, first) in candidates.iter().enumerate() {
            for second in &candidates[i + 1..] {
                let distance = first.distance_to(second, self.metric.as_ref());
                if distance > self.max_distance_km {
                    continue;
                }

                let first_ground = ground_code(first.code());
                let second_ground = ground_code(second.code());

                link_ground_node(&mut builder, first.code(), &first_ground);
                link_ground_node(&mut builder, second.code(), &second_ground);
                builder.insert_edge(first_ground.clone(), second_ground.clone(), distance);
                builder.insert_edge(second_ground, first_ground, distance);
                transfers += 1;
            }
        }

        let graph = builder.build();
        debug!(
            base_edges = base.edge_count(),
            edges = graph.edge_count(),
            transfers,
            max_distance_km = self.max_distance_km,
            "added ground transfers"
        );
        graph
    }
}

fn source_codes(airport: &Airport) -> Vec<&str> {
    let mut codes: Vec<&str> = Vec::with_capacity(3);
    for code in [&airport.iata, &airport.icao, &airport.id] {
        if code.is_empty() || code == UNKNOWN_CODE || codes.contains(&code.as_str()) {
            continue;
        }
        codes.push(code);
    }
    codes
}

fn link_ground_node(builder: &mut GraphBuilder, airport: &str, ground: &str) {
    builder.insert_edge(airport, ground, 0.0);
    builder.insert_edge(ground, airport, 0.0);
}

fn unique_by_id<'a>(
    airports: impl Iterator<Item = &'a Arc<Airport>>,
) -> impl Iterator<Item = &'a Airport> {
    let mut seen = HashSet::new();
    airports
        .map(Arc::as_ref)
        .filter(move |airport| seen.insert(airport.id.as_str()))
}

/// Group items by a borrowed key, preserving their relative order.
fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> HashMap<K, Vec<&'a T>>
where
    T: 'a,
    K: std::hash::Hash + Eq,
    F: Fn(&'a T) -> K,
{
    items.into_iter().fold(HashMap::new(), |mut groups, item| {
        groups.entry(key(item)).or_insert_with(Vec::new).push(item);
        groups
    })
}
