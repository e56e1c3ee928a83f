//! Definition of the [`Route`] type returned by a search.

use serde::Serialize;

use crate::node::Node;

/// An ordered walk from the start node to the goal node, both
/// included, and its total weight.
///
/// An empty route with a distance of 0.0 means no path was found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Route {
    /// The nodes visited, start first.
    pub nodes: Vec<Node>,

    /// Sum of the edge weights along `nodes`.
    pub distance: f64,
}

impl Route {
    /// The "no path" result.
    pub fn empty() -> Self {
        Route::default()
    }

    /// Whether this is the "no path" result.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the route, as shown next to the distance.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node names in route order.
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name.as_str()).collect()
    }
}
