//! Common test utilities and fixture helpers.

use std::path::PathBuf;
use std::sync::Arc;

use airhop_lib::{
    AirportIndex, AirportSource, ConnectionGraph, CsvDataset, RouteRecord, RouteSource,
};

/// Path to fixtures directory used by tests (airports.csv, routes.csv).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the fixture dataset into memory.
#[allow(dead_code)]
pub fn fixture_dataset() -> (Arc<AirportIndex>, Arc<[RouteRecord]>) {
    let dataset = CsvDataset::open(fixtures_dir()).expect("fixture dataset present");
    let airports = dataset.load_airports().expect("fixture airports load");
    let routes = dataset.fetch_routes().expect("fixture routes load");
    (Arc::new(AirportIndex::new(airports)), routes.into())
}

/// Build a graph from `(node, [(neighbour, weight)])` rows.
#[allow(dead_code)]
pub fn graph(rows: &[(&str, &[(&str, f64)])]) -> ConnectionGraph {
    rows.iter()
        .map(|(node, edges)| (node.to_string(), edges.iter().map(|(n, w)| (n.to_string(), *w)).collect::<Vec<_>>()))
        .collect()
}

/// Owned path from string slices.
#[allow(dead_code)]
pub fn path(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|code| code.to_string()).collect()
}
