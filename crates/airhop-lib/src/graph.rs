use std::collections::BTreeMap;
use std::sync::Arc;

/// Marker appended to an airport code to form its ground node.
pub const GROUND_SUFFIX: char = '+';

/// Outgoing edges of a single node, keyed by neighbour code.
pub type Neighbours = BTreeMap<String, f64>;

/// Code of the ground node paired with `airport_code`.
pub fn ground_code(airport_code: &str) -> String {
    format!("{airport_code}{GROUND_SUFFIX}")
}

/// Whether `code` names a synthetic ground node.
pub fn is_ground_code(code: &str) -> bool {
    code.ends_with(GROUND_SUFFIX)
}

/// Airport a node belongs to: the code itself for airports, the paired
/// airport for ground nodes.
pub fn airport_code_of(code: &str) -> &str {
    code.strip_suffix(GROUND_SUFFIX).unwrap_or(code)
}

/// Weighted directed graph of airport (and ground node) connections.
///
/// The graph is immutable once built and cheap to clone, so a single snapshot
/// can back any number of concurrent searches. Neighbour iteration is sorted
/// by code, which keeps search results reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionGraph {
    adjacency: Arc<BTreeMap<String, Neighbours>>,
}

impl ConnectionGraph {
    /// Outgoing edges of `code` as `(neighbour, weight)` pairs.
    pub fn neighbours<'a>(&'a self, code: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(code)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, weight)| (target.as_str(), *weight)))
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Node codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Start a new graph seeded with this graph's nodes and edges. The
    /// original is left untouched.
    pub fn to_builder(&self) -> GraphBuilder {
        GraphBuilder {
            adjacency: (*self.adjacency).clone(),
        }
    }
}

impl<N, E> FromIterator<(N, E)> for ConnectionGraph
where
    N: Into<String>,
    E: IntoIterator<Item = (N, f64)>,
{
    fn from_iter<I: IntoIterator<Item = (N, E)>>(iter: I) -> Self {
        let mut builder = GraphBuilder::new();
        for (node, edges) in iter {
            let node = node.into();
            builder.insert_node(node.clone());
            for (target, weight) in edges {
                builder.insert_edge(node.clone(), target, weight);
            }
        }
        builder.build()
    }
}

/// Mutable staging area for a [`ConnectionGraph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    adjacency: BTreeMap<String, Neighbours>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `code` is present, with no edges if it was absent.
    pub fn insert_node(&mut self, code: impl Into<String>) -> &mut Neighbours {
        self.adjacency.entry(code.into()).or_default()
    }

    /// Insert or overwrite the edge `from -> to`.
    pub fn insert_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: f64) {
        debug_assert!(weight >= 0.0, "edge weights must be non-negative");
        self.insert_node(from).insert(to.into(), weight);
    }

    pub fn build(self) -> ConnectionGraph {
        ConnectionGraph {
            adjacency: Arc::new(self.adjacency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_code_helpers_round_trip() {
        let ground = ground_code("LHR");
        assert_eq!(ground, "LHR+");
        assert!(is_ground_code(&ground));
        assert!(!is_ground_code("LHR"));
        assert_eq!(airport_code_of(&ground), "LHR");
        assert_eq!(airport_code_of("LHR"), "LHR");
    }

    #[test]
    fn graph_from_iter_keeps_isolated_nodes() {
        let graph: ConnectionGraph = [
            ("A", vec![("B", 10.0)]),
            ("B", vec![]),
            ("C", vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains("C"));
        assert_eq!(graph.neighbours("C").count(), 0);
        assert_eq!(graph.weight("A", "B"), Some(10.0));
        assert_eq!(graph.weight("B", "A"), None);
    }

    #[test]
    fn builder_overwrites_duplicate_edges() {
        let mut builder = GraphBuilder::new();
        builder.insert_edge("A", "B", 10.0);
        builder.insert_edge("A", "B", 25.0);
        let graph = builder.build();

        assert_eq!(graph.weight("A", "B"), Some(25.0));
        assert_eq!(graph.edge_count(), 1);
        // The target of an edge is not implicitly a node.
        assert!(!graph.contains("B"));
    }

    #[test]
    fn to_builder_does_not_touch_the_original() {
        let original: ConnectionGraph = [("A", vec![("B", 1.0)])].into_iter().collect();
        let mut builder = original.to_builder();
        builder.insert_edge("B", "A", 1.0);
        let extended = builder.build();

        assert_eq!(original.edge_count(), 1);
        assert_eq!(extended.edge_count(), 2);
    }

    #[test]
    fn neighbours_iterate_in_code_order() {
        let graph: ConnectionGraph = [("A", vec![("C", 1.0), ("B", 2.0)])].into_iter().collect();
        let order: Vec<&str> = graph.neighbours("A").map(|(code, _)| code).collect();
        assert_eq!(order, vec!["B", "C"]);
    }
}
