//! Struct definitions and implementations for objects that represent
//! vertices in the campus graph.
//!
//! A [`Node`] is a named point of interest: a building entrance, a
//! path junction or a crossing. Graphs are loaded with one `Node`
//! value per edge endpoint, so two `Node`s describing the same place
//! are common. They are told apart by position only, see
//! [`Node::is_same_node`].

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::identity;

/// Represent a vertex in the campus graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Display name shown by the map. Not part of the node identity.
    pub name: String,

    /// Denotes the position of the node.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl Node {
    /// Creates a node at the given coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            name: name.into(),
            location: Location::new(x, y),
        }
    }

    /// Whether both nodes stand for the same campus point.
    pub fn is_same_node(&self, other: &Node) -> bool {
        identity::same_location(&self.location, &other.location)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod node_type_tests {
    use super::*;

    /// Names do not take part in identity, positions do.
    #[test]
    fn test_same_node_ignores_name() {
        let library = Node::new("Newman Library", 37.22878, -80.41939);
        let junction = Node::new("Node(37.22878,-80.41939)", 37.22878, -80.41939);
        let torgersen = Node::new("Torgersen Hall", 37.22966, -80.42006);

        assert!(library.is_same_node(&junction));
        assert!(!library.is_same_node(&torgersen));
    }

    #[test]
    fn test_deserialize_node() {
        let node: Node =
            serde_json::from_str(r#"{"name": "Goodwin Hall", "location": {"x": 300.0, "y": 200.0}}"#)
                .unwrap();
        assert_eq!(node.name, "Goodwin Hall");
        assert_eq!(node.location, Location::new(300.0, 200.0));
    }
}
