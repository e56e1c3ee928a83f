//! Helper functons for turning loader records into graph parts.

use indexmap::IndexMap;

use crate::campus::EdgeRecord;
use crate::edge::Edge;
use crate::identity::same_location;
use crate::location::Location;
use crate::node::Node;

/// Finds the node at `location`: exact coordinate key first, then the
/// earliest declared node within tolerance.
pub fn lookup_node<'a>(nodes: &'a IndexMap<Location, Node>, location: &Location) -> Option<&'a Node> {
    nodes.get(location).or_else(|| {
        nodes
            .values()
            .find(|node| same_location(&node.location, location))
    })
}

/// Build edges from edge records.
///
/// A record is dropped, with a warning, when one of its endpoints does
/// not resolve to a node, or when its weight is negative or not a
/// finite number.
///
/// # Arguments
/// * `nodes` - Known nodes keyed by their exact location.
/// * `records` - Edge records in declaration order.
///
/// # Returns
/// The resolved edges, in the same order as `records`.
pub fn build_edges(nodes: &IndexMap<Location, Node>, records: &[EdgeRecord]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(records.len());
    for record in records {
        if !record.weight.is_finite() || record.weight < 0.0 {
            warn!(
                "Dropping edge {:?} -> {:?}: invalid weight {}",
                record.from, record.to, record.weight
            );
            continue;
        }
        match (lookup_node(nodes, &record.from), lookup_node(nodes, &record.to)) {
            (Some(from), Some(to)) => {
                edges.push(Edge::new(from.clone(), to.clone(), record.weight));
            }
            _ => {
                warn!(
                    "Dropping edge {:?} -> {:?}: unknown endpoint",
                    record.from, record.to
                );
            }
        }
    }
    edges
}
