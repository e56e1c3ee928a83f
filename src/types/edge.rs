//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::identity::same_location;
use crate::node::Node;

/// An edge is an undirected connection between two nodes.
/// The cost represents the "weight" of the edge: the walking distance
/// between both ends. It is never negative.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// One end of the edge.
    pub from: Node,

    /// The other end of the edge.
    pub to: Node,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl Edge {
    /// Creates an edge. Callers are responsible for `cost >= 0`;
    /// [`crate::campus::CampusMap::from_records`] filters out anything
    /// else.
    pub fn new(from: Node, to: Node, cost: f64) -> Self {
        Edge {
            from,
            to,
            cost: OrderedFloat(cost),
        }
    }

    /// Returns the weight as a plain float.
    pub fn weight(&self) -> f64 {
        self.cost.into_inner()
    }

    /// Whether the edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &Node, b: &Node) -> bool {
        (same_location(&self.from.location, &a.location)
            && same_location(&self.to.location, &b.location))
            || (same_location(&self.from.location, &b.location)
                && same_location(&self.to.location, &a.location))
    }
}
