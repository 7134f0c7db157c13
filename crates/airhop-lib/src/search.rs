//! Shortest route search over a [`ConnectionGraph`].
//!
//! The search is a uniform-cost (Dijkstra-style) expansion ordered by the
//! cumulative distance of each candidate path. Two visited sets are kept:
//!
//! - node-level, so a node already expanded is never enqueued again as a
//!   neighbour;
//! - path-level, so the exact same path is never expanded twice while a node
//!   may still be entered again along a different path. Graphs with ground
//!   nodes contain zero-weight cycles (airport ↔ ground node) that rely on this.
//!
//! The hop budget is enforced by a [`RouteLengthPolicy`] injected at
//! construction time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::graph::{is_ground_code, ConnectionGraph};

/// Separator for path signatures; never part of an airport code.
const PATH_SIGNATURE_SEPARATOR: char = '\u{1f}';

/// Options applied to a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Hop budget. `None` and `Some(0)` both mean unlimited.
    pub hops: Option<usize>,
}

impl RouteOptions {
    pub fn with_hops(hops: usize) -> Self {
        Self { hops: Some(hops) }
    }

    fn budget(&self) -> Option<usize> {
        self.hops.filter(|hops| *hops > 0)
    }
}

/// Result of a search: the visited node codes and the total distance.
///
/// An empty path with zero distance means no route exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub total_distance: f64,
}

impl Route {
    /// The "no route" result.
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges traversed, ground transfers included.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Decides whether a partial path still fits the hop budget.
pub trait RouteLengthPolicy: Send + Sync {
    /// `path` is the path leading up to (not including) the node about to
    /// be expanded. `hops` is the budget; `None` means unlimited.
    fn is_valid(&self, path: &[String], hops: Option<usize>) -> bool;
}

/// Every node on the path counts towards the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLengthPolicy;

impl RouteLengthPolicy for PathLengthPolicy {
    fn is_valid(&self, path: &[String], hops: Option<usize>) -> bool {
        match hops {
            Some(hops) => path.len() < hops,
            None => true,
        }
    }
}

/// Only flight legs count: a step is free when it starts at a ground node or
/// leads into one.
///
/// The policy sees the path before the next node is appended, so its last
/// airport always counts. When that airport is left by a ground transfer it
/// is still charged once while its ground node is being expanded: reaching
/// `VNO+` from `TLL -> RIX -> VNO` needs a budget above 3 even though the
/// finished route only holds two flights.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundAwarePolicy;

impl GroundAwarePolicy {
    /// Number of steps on `path` that count as flights.
    pub fn flight_steps(path: &[String]) -> usize {
        path.iter()
            .enumerate()
            .filter(|(index, code)| {
                let next_is_ground = path
                    .get(index + 1)
                    .is_some_and(|next| is_ground_code(next));
                !is_ground_code(code) && !next_is_ground
            })
            .count()
    }
}

impl RouteLengthPolicy for GroundAwarePolicy {
    fn is_valid(&self, path: &[String], hops: Option<usize>) -> bool {
        match hops {
            Some(hops) => Self::flight_steps(path) < hops,
            None => true,
        }
    }
}

/// Explicit choice between the two hop counting policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HopCounting {
    /// Every node counts, ground nodes included.
    #[default]
    AllStops,
    /// Ground transfers are free.
    FlightsOnly,
}

impl HopCounting {
    pub fn policy(self) -> Box<dyn RouteLengthPolicy> {
        match self {
            HopCounting::AllStops => Box::new(PathLengthPolicy),
            HopCounting::FlightsOnly => Box::new(GroundAwarePolicy),
        }
    }
}

/// Anything able to compute a route between two node codes.
pub trait RouteStrategy: Send + Sync {
    fn build_route(&self, source: &str, destination: &str, options: &RouteOptions) -> Route;
}

/// Shortest route by total distance, subject to a hop policy.
pub struct ShortestRouteStrategy {
    graph: ConnectionGraph,
    policy: Box<dyn RouteLengthPolicy>,
}

impl ShortestRouteStrategy {
    pub fn new(graph: ConnectionGraph, policy: Box<dyn RouteLengthPolicy>) -> Self {
        Self { graph, policy }
    }

    /// Strategy using [`PathLengthPolicy`].
    pub fn with_default_policy(graph: ConnectionGraph) -> Self {
        Self::new(graph, Box::new(PathLengthPolicy))
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }
}

impl RouteStrategy for ShortestRouteStrategy {
    fn build_route(&self, source: &str, destination: &str, options: &RouteOptions) -> Route {
        let hops = options.budget();
        let mut visited = Visited::default();
        let mut queue = BinaryHeap::new();
        let mut sequence = 0u64;
        let mut expanded = 0usize;

        queue.push(QueueEntry::new(source.to_string(), Vec::new(), 0.0, sequence));

        while let Some(entry) = queue.pop() {
            let QueueEntry {
                node,
                path: previous,
                cost,
                ..
            } = entry;

            let mut path = previous;
            let within_budget = self.policy.is_valid(&path, hops);
            path.push(node);

            if !within_budget || !visited.admit(&path) {
                continue;
            }

            let node = path[path.len() - 1].as_str();
            expanded += 1;

            if node == destination {
                debug!(
                    source,
                    destination,
                    expanded,
                    hops = path.len().saturating_sub(1),
                    total_distance = cost.0,
                    "route found"
                );
                return Route {
                    path,
                    total_distance: cost.0,
                };
            }

            for (neighbour, weight) in self.graph.neighbours(node) {
                if visited.has_node(neighbour) {
                    continue;
                }
                sequence += 1;
                queue.push(QueueEntry::new(
                    neighbour.to_string(),
                    path.clone(),
                    cost.0 + weight,
                    sequence,
                ));
            }
        }

        debug!(source, destination, expanded, "no route found");
        Route::not_found()
    }
}

/// Node-level and path-level visited sets of one search.
#[derive(Debug, Default)]
struct Visited {
    nodes: HashSet<String>,
    paths: HashSet<String>,
}

impl Visited {
    /// Record `path` (ending at the node being expanded). Returns `false`
    /// when this exact path was expanded before.
    fn admit(&mut self, path: &[String]) -> bool {
        if !self.paths.insert(path_signature(path)) {
            return false;
        }
        if let Some(node) = path.last() {
            self.nodes.insert(node.clone());
        }
        true
    }

    fn has_node(&self, code: &str) -> bool {
        self.nodes.contains(code)
    }
}

fn path_signature(path: &[String]) -> String {
    let mut signature = String::new();
    for (index, code) in path.iter().enumerate() {
        if index > 0 {
            signature.push(PATH_SIGNATURE_SEPARATOR);
        }
        signature.push_str(code);
    }
    signature
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Search state: node to expand, the path that led to it, and its distance.
#[derive(Clone, Debug, PartialEq, Eq)]
struct QueueEntry {
    node: String,
    path: Vec<String>,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: String, path: Vec<String>, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            path,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs come out in insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
