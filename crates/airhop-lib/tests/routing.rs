mod common;

use airhop_lib::{
    GroundAwarePolicy, RouteOptions, RouteStrategy, ShortestRouteStrategy,
};

use common::{graph, path};

fn sample_graph() -> airhop_lib::ConnectionGraph {
    graph(&[
        ("A1", &[("A2", 500.0), ("A3", 100.0)]),
        ("A2", &[("A1", 500.0), ("A6", 800.0), ("A9", 1000.0)]),
        ("A3", &[("A1", 100.0), ("A4", 200.0), ("A5", 600.0)]),
        ("A4", &[("A3", 200.0), ("A7", 300.0)]),
        ("A5", &[("A3", 600.0), ("A7", 800.0)]),
        ("A6", &[("A2", 800.0), ("A7", 500.0), ("A8", 1200.0)]),
        ("A7", &[("A4", 300.0), ("A5", 800.0), ("A6", 500.0), ("A8", 400.0)]),
        ("A8", &[("A6", 1200.0), ("A7", 400.0), ("A9", 700.0)]),
        ("A9", &[("A2", 1000.0), ("A8", 700.0)]),
        ("A10", &[]),
    ])
}

#[test]
fn shortest_route_without_budget() {
    let strategy = ShortestRouteStrategy::with_default_policy(sample_graph());
    let route = strategy.build_route("A1", "A8", &RouteOptions::default());

    assert_eq!(route.path, path(&["A1", "A3", "A4", "A7", "A8"]));
    assert_eq!(route.total_distance, 1000.0);
    assert_eq!(route.hop_count(), 4);
}

#[test]
fn hop_budget_rejects_every_route() {
    let strategy = ShortestRouteStrategy::with_default_policy(sample_graph());
    let route = strategy.build_route("A1", "A8", &RouteOptions::with_hops(3));

    assert!(route.path.is_empty());
    assert_eq!(route.total_distance, 0.0);
}

#[test]
fn hop_budget_picks_longer_but_shorter_route() {
    let connections = graph(&[
        ("A1", &[("A2", 10.0), ("A5", 50.0)]),
        ("A2", &[("A1", 10.0), ("A3", 10.0)]),
        ("A3", &[("A2", 10.0), ("A4", 10.0)]),
        ("A4", &[("A3", 10.0), ("A5", 50.0)]),
        ("A5", &[("A4", 50.0)]),
    ]);
    let strategy = ShortestRouteStrategy::with_default_policy(connections.clone());

    let route = strategy.build_route("A1", "A4", &RouteOptions::with_hops(3));
    assert_eq!(route.path, path(&["A1", "A5", "A4"]));
    assert_eq!(route.total_distance, 100.0);

    let unlimited = strategy.build_route("A1", "A4", &RouteOptions::default());
    assert_eq!(unlimited.path, path(&["A1", "A2", "A3", "A4"]));
    assert_eq!(unlimited.total_distance, 30.0);
}

#[test]
fn unreachable_destination_is_empty() {
    let strategy = ShortestRouteStrategy::with_default_policy(sample_graph());
    let route = strategy.build_route("A1", "A10", &RouteOptions::default());

    assert!(!route.is_found());
    assert_eq!(route.total_distance, 0.0);
}

#[test]
fn single_ground_transfer() {
    let connections = graph(&[
        ("A1", &[("A2", 500.0)]),
        ("A2", &[("A1", 500.0), ("A9", 1000.0)]),
        ("A9", &[("A2", 1000.0), ("A9+", 0.0)]),
        ("A9+", &[("A9", 0.0), ("A10+", 50.0)]),
        ("A10+", &[("A9+", 50.0), ("A10", 0.0)]),
        ("A10", &[("A10+", 0.0)]),
    ]);
    let strategy = ShortestRouteStrategy::with_default_policy(connections);
    let route = strategy.build_route("A1", "A10", &RouteOptions::default());

    assert_eq!(route.path, path(&["A1", "A2", "A9", "A9+", "A10+", "A10"]));
    assert_eq!(route.total_distance, 1550.0);
}

#[test]
fn ground_transfers_are_free_under_ground_aware_policy() {
    let connections = graph(&[
        ("A1", &[("A2", 500.0)]),
        ("A2", &[("A1", 500.0), ("A2+", 0.0)]),
        ("A2+", &[("A2", 0.0), ("A3+", 70.0)]),
        ("A3", &[("A3+", 0.0)]),
        ("A3+", &[("A3", 0.0), ("A2+", 70.0), ("A4+", 55.0)]),
        ("A4", &[("A4+", 0.0), ("A5", 1000.0)]),
        ("A4+", &[("A4", 0.0)]),
        ("A5", &[("A6", 600.0)]),
        ("A6", &[("A5", 600.0), ("A6+", 0.0)]),
        ("A6+", &[("A6", 0.0), ("A7+", 20.0)]),
        ("A7", &[("A7+", 0.0)]),
        ("A7+", &[("A7", 0.0)]),
    ]);
    let expected = path(&[
        "A1", "A2", "A2+", "A3+", "A4+", "A4", "A5", "A6", "A6+", "A7+", "A7",
    ]);

    let ground_aware = ShortestRouteStrategy::new(connections.clone(), Box::new(GroundAwarePolicy));
    let route = ground_aware.build_route("A1", "A7", &RouteOptions::with_hops(5));
    assert_eq!(route.path, expected);
    assert_eq!(route.total_distance, 2245.0);

    // Counting every stop, eleven nodes never fit a budget of five.
    let counting_all = ShortestRouteStrategy::with_default_policy(connections);
    let route = counting_all.build_route("A1", "A7", &RouteOptions::with_hops(5));
    assert!(!route.is_found());
}
