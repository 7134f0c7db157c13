//! airhop library entry points.
//!
//! This crate loads the airport and route flat files, builds connection
//! graphs (optionally augmented with ground transfers between nearby
//! airports) and searches them for the shortest itinerary. Higher-level
//! consumers (CLI, HTTP service) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod airport;
pub mod connections;
pub mod dataset;
pub mod directory;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod planner;
pub mod search;

pub use airport::{Airport, DistanceMetric, GeoPoint, Haversine, UNKNOWN_CODE};
pub use connections::{
    ConnectionStrategy, GroundTransferStrategy, RegularFlightsStrategy, DEFAULT_GROUND_DISTANCE_KM,
};
pub use dataset::{
    default_data_dir, AirportSource, CsvDataset, DatasetPaths, RouteRecord, RouteSource,
    DATA_DIR_ENV,
};
pub use directory::{AirportDirectory, AirportIndex, CachedAirportDirectory};
pub use error::{Error, Result};
pub use graph::{ConnectionGraph, GraphBuilder, GROUND_SUFFIX};
pub use itinerary::{Itinerary, LegKind, Stop};
pub use planner::{plan_route, GroundOptions, RoutePlan, RouteRequest};
pub use search::{
    GroundAwarePolicy, HopCounting, PathLengthPolicy, Route, RouteLengthPolicy, RouteOptions,
    RouteStrategy, ShortestRouteStrategy,
};
