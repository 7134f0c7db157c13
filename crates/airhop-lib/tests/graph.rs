mod common;

use std::sync::Arc;

use airhop_lib::{
    ConnectionStrategy, GroundTransferStrategy, RegularFlightsStrategy,
    DEFAULT_GROUND_DISTANCE_KM,
};

use common::fixture_dataset;

#[test]
fn regular_graph_from_fixture() {
    let (airports, routes) = fixture_dataset();
    let graph = RegularFlightsStrategy::new(Arc::clone(&airports), routes).build_connections();

    // Every airport is a node, including those without flights.
    assert_eq!(graph.node_count(), airports.len());
    assert!(graph.contains("TAY"));
    assert!(graph.contains("EEKE"));
    assert!(!graph.contains("\\N"));

    // The route towards an airport missing from the dataset is dropped.
    assert_eq!(graph.edge_count(), 16);
    assert_eq!(graph.neighbours("KUN").count(), 0);

    // ICAO-keyed routes land on the IATA nodes.
    assert!(graph.weight("OSL", "CPH").is_some());

    let tll_hel = graph.weight("TLL", "HEL").expect("TLL -> HEL flight");
    assert!((tll_hel - 100.77).abs() < 0.01, "got {tll_hel}");
    assert_eq!(graph.weight("HEL", "TLL"), Some(tll_hel));
}

#[test]
fn ground_augmentation_links_nearby_airports() {
    let (airports, routes) = fixture_dataset();
    let flights = RegularFlightsStrategy::new(Arc::clone(&airports), routes);
    let regular = flights.build_connections();
    let graph = GroundTransferStrategy::new(flights, DEFAULT_GROUND_DISTANCE_KM, airports)
        .build_connections();

    // Only Vilnius and Kaunas are within 100 km of each other.
    assert_eq!(graph.node_count(), regular.node_count() + 2);
    assert_eq!(graph.edge_count(), regular.edge_count() + 6);

    assert_eq!(graph.weight("VNO", "VNO+"), Some(0.0));
    assert_eq!(graph.weight("VNO+", "VNO"), Some(0.0));
    assert_eq!(graph.weight("KUN", "KUN+"), Some(0.0));
    assert_eq!(graph.weight("KUN+", "KUN"), Some(0.0));

    let transfer = graph.weight("VNO+", "KUN+").expect("ground transfer");
    assert!((transfer - 85.27).abs() < 0.01, "got {transfer}");
    assert_eq!(graph.weight("KUN+", "VNO+"), Some(transfer));

    // Tallinn and Helsinki are just over the threshold.
    assert!(!graph.contains("TLL+"));
    assert!(!graph.contains("HEL+"));

    // Regular edges survive untouched.
    for code in regular.codes() {
        let before: Vec<_> = regular.neighbours(code).collect();
        let after: Vec<_> = graph
            .neighbours(code)
            .filter(|(neighbour, _)| !neighbour.ends_with('+'))
            .collect();
        assert_eq!(before, after, "edges of {code}");
    }
}

#[test]
fn wider_ground_radius_links_more_airports() {
    let (airports, routes) = fixture_dataset();
    let flights = RegularFlightsStrategy::new(Arc::clone(&airports), routes);
    let graph = GroundTransferStrategy::new(flights, 170.0, airports).build_connections();

    assert!(graph.weight("TLL+", "HEL+").is_some());
    assert!(graph.weight("TLL+", "TAY+").is_some());
    assert!(graph.weight("TLL+", "EEKE+").is_none());

    // Airports without an IATA code never get a ground node.
    assert!(!graph.contains("EEKE+"));
    assert!(!graph.contains("RIX+"));
}
