//! The campus graph model.
//!
//! A [`CampusMap`] is populated once from loader records and is read
//! only afterward. Renderers enumerate it, the
//! [`Pathfinder`](crate::router::engine::Pathfinder) searches its
//! edges.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::edge::Edge;
use crate::graph::{build_edges, lookup_node};
use crate::identity::euclidean_distance;
use crate::location::Location;
use crate::node::Node;
use crate::route::Route;
use crate::router::engine::Pathfinder;

/// A node as handed over by a map loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Display name. Unnamed points get one derived from their
    /// coordinates.
    #[serde(default)]
    pub name: Option<String>,

    /// First coordinate.
    pub x: f64,

    /// Second coordinate.
    pub y: f64,
}

impl NodeRecord {
    fn into_node(self) -> Node {
        let name = self
            .name
            .unwrap_or_else(|| format!("Node({},{})", self.x, self.y));
        Node::new(name, self.x, self.y)
    }
}

/// An edge as handed over by a map loader: both endpoints by
/// coordinates and a walking distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Location of one end.
    pub from: Location,

    /// Location of the other end.
    pub to: Location,

    /// Weight of the edge. Must be finite and non-negative.
    pub weight: f64,
}

/// Holds the nodes and edges of the campus.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    /// Nodes keyed by their exact coordinates, in declaration order.
    nodes: IndexMap<Location, Node>,

    /// Edges in declaration order.
    edges: Vec<Edge>,
}

impl CampusMap {
    /// Builds the map from loader records.
    ///
    /// A node record at the same exact coordinates as an earlier one
    /// replaces it but keeps the earlier declaration position. Edge
    /// records whose endpoints cannot be resolved, or whose weight is
    /// invalid, are dropped.
    pub fn from_records(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> CampusMap {
        info!(
            "Building campus map from {} node and {} edge records",
            nodes.len(),
            edges.len()
        );
        let mut node_map = IndexMap::with_capacity(nodes.len());
        for record in nodes {
            let node = record.into_node();
            if let Some(previous) = node_map.insert(node.location, node) {
                debug!("Replacing duplicate node {}", previous.name);
            }
        }

        let edges = build_edges(&node_map, &edges);
        info!(
            "Campus map ready: {} nodes, {} edges",
            node_map.len(),
            edges.len()
        );
        CampusMap {
            nodes: node_map,
            edges,
        }
    }

    /// Returns all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns all edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Finds the node at `location`, within the coordinate tolerance.
    pub fn find_node(&self, location: &Location) -> Option<&Node> {
        lookup_node(&self.nodes, location)
    }

    /// Returns the node closest to `location` in coordinate space, or
    /// [`None`] if the map is empty. Ties go to the node declared first.
    pub fn nearest_node(&self, location: &Location) -> Option<&Node> {
        self.nodes.values().min_by(|a, b| {
            euclidean_distance(&a.location, location)
                .total_cmp(&euclidean_distance(&b.location, location))
        })
    }

    /// Returns the first declared node named `name`.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.values().find(|node| node.name == name)
    }

    /// Find the shortest route between two nodes of this map.
    ///
    /// See [`Pathfinder::find_route`].
    pub fn find_route(&self, start: &Node, goal: &Node, config: &SearchConfig) -> Route {
        Pathfinder::new(config.clone()).find_route(start, goal, &self.edges)
    }
}

#[cfg(test)]
mod campus_tests {
    use super::*;
    use crate::config::Heuristic;

    fn node(name: &str, x: f64, y: f64) -> NodeRecord {
        NodeRecord {
            name: Some(name.to_string()),
            x,
            y,
        }
    }

    fn edge(from: (f64, f64), to: (f64, f64), weight: f64) -> EdgeRecord {
        EdgeRecord {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    fn triangle() -> CampusMap {
        CampusMap::from_records(
            vec![node("A", 0.0, 0.0), node("B", 0.0, 3.0), node("C", 4.0, 0.0)],
            vec![
                edge((0.0, 0.0), (0.0, 3.0), 3.0),
                edge((0.0, 3.0), (4.0, 0.0), 5.0),
                edge((0.0, 0.0), (4.0, 0.0), 10.0),
            ],
        )
    }

    #[test]
    fn test_counts() {
        let map = triangle();
        assert_eq!(map.node_count(), 3);
        assert_eq!(map.edge_count(), 3);
        assert_eq!(map.nodes().count(), 3);
        assert_eq!(map.edges().len(), 3);
    }

    #[test]
    fn test_unknown_endpoints_are_dropped() {
        let map = CampusMap::from_records(
            vec![node("A", 0.0, 0.0), node("B", 0.0, 3.0)],
            vec![
                edge((0.0, 0.0), (0.0, 3.0), 3.0),
                edge((0.0, 3.0), (4.0, 0.0), 5.0),
            ],
        );
        assert_eq!(map.edge_count(), 1);
        for edge in map.edges() {
            assert!(map.find_node(&edge.from.location).is_some());
            assert!(map.find_node(&edge.to.location).is_some());
        }
    }

    #[test]
    fn test_unnamed_and_duplicate_nodes() {
        let map = CampusMap::from_records(
            vec![
                NodeRecord {
                    name: None,
                    x: 1.5,
                    y: 2.0,
                },
                node("First", 0.0, 0.0),
                node("Second", 0.0, 0.0),
            ],
            vec![],
        );
        assert_eq!(map.node_count(), 2);
        assert_eq!(
            map.find_node(&Location::new(1.5, 2.0)).unwrap().name,
            "Node(1.5,2)"
        );
        assert_eq!(map.find_node(&Location::new(0.0, 0.0)).unwrap().name, "Second");
    }

    #[test]
    fn test_nearest_node() {
        let map = triangle();
        assert_eq!(map.nearest_node(&Location::new(0.5, 2.5)).unwrap().name, "B");
        assert_eq!(map.nearest_node(&Location::new(3.0, 0.2)).unwrap().name, "C");
        assert!(CampusMap::default().nearest_node(&Location::new(0.0, 0.0)).is_none());
    }

    /// Equally close nodes and repeated names resolve the same way on
    /// every rebuild of the map.
    #[test]
    fn test_ties_go_to_first_declared_node() {
        for _ in 0..50 {
            let map = CampusMap::from_records(
                vec![
                    node("West", -1.0, 0.0),
                    node("East", 1.0, 0.0),
                    node("Gate", 0.0, 5.0),
                    node("Gate", 0.0, -5.0),
                ],
                vec![],
            );
            assert_eq!(map.nearest_node(&Location::new(0.0, 0.0)).unwrap().name, "West");
            assert_eq!(
                map.node_by_name("Gate").unwrap().location,
                Location::new(0.0, 5.0)
            );
            let names: Vec<&str> = map.nodes().map(|node| node.name.as_str()).collect();
            assert_eq!(names, vec!["West", "East", "Gate", "Gate"]);
        }
    }

    #[test]
    fn test_find_route() {
        let map = triangle();
        let a = map.find_node(&Location::new(0.0, 0.0)).unwrap();
        let c = map.find_node(&Location::new(4.0, 0.0)).unwrap();
        let config = SearchConfig {
            heuristic: Heuristic::ScaledEuclidean { scale: 1.0 },
            ..SearchConfig::default()
        };
        let route = map.find_route(a, c, &config);
        assert_eq!(route.names(), vec!["A", "B", "C"]);
        assert_eq!(route.distance, 8.0);
    }

    #[test]
    fn test_deserialize_records() {
        let nodes: Vec<NodeRecord> = serde_json::from_str(
            r#"[{"name": "Goodwin Hall", "x": 37.2323, "y": -80.4257}, {"x": 37.2299, "y": -80.4231}]"#,
        )
        .unwrap();
        let edges: Vec<EdgeRecord> = serde_json::from_str(
            r#"[{"from": {"x": 37.2323, "y": -80.4257}, "to": {"x": 37.2299, "y": -80.4231}, "weight": 350.5}]"#,
        )
        .unwrap();
        let map = CampusMap::from_records(nodes, edges);

        assert_eq!(map.node_count(), 2);
        assert_eq!(map.edge_count(), 1);
        assert_eq!(map.edges()[0].from.name, "Goodwin Hall");
        assert_eq!(map.edges()[0].to.name, "Node(37.2299,-80.4231)");
    }
}
