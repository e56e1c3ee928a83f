//! Defines the per-search graph.
//!
//! Edges reference their endpoints by value, so one campus point shows
//! up as many [`Node`] values. A [`SearchGraph`] collapses them into a
//! single vertex per point (see [`crate::identity`]) and stores the
//! result in an undirected [`petgraph`] graph, which the
//! [`Pathfinder`](crate::router::engine::Pathfinder) walks.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::edge::Edge;
use crate::identity::{same_location, COORDINATE_EPSILON};
use crate::location::Location;
use crate::node::Node;

/// Weight of a search graph edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    /// Weight of the source edge.
    pub weight: f64,

    /// Position of the source edge in the edge slice.
    pub edge_index: usize,
}

/// The canonical vertex universe of a single search.
///
/// The first `Node` value seen for a point becomes its vertex. Later
/// values within tolerance of it resolve to that vertex.
#[derive(Debug)]
pub struct SearchGraph<'a> {
    graph: UnGraph<&'a Node, Hop>,
    /// Exact coordinates already resolved, including aliases that
    /// matched a vertex by tolerance.
    resolved: HashMap<Location, NodeIndex>,
    /// Vertices bucketed by [`grid_cell`]. A point within tolerance of
    /// a vertex always lies in the vertex cell or one next to it.
    cells: HashMap<(i64, i64), Vec<NodeIndex>>,
}

/// Grid cell of side [`COORDINATE_EPSILON`] holding `location`.
fn grid_cell(location: &Location) -> (i64, i64) {
    (
        (location.x.into_inner() / COORDINATE_EPSILON).floor() as i64,
        (location.y.into_inner() / COORDINATE_EPSILON).floor() as i64,
    )
}

impl<'a> SearchGraph<'a> {
    /// Builds the graph from the endpoints of `edges`, in edge order.
    ///
    /// # Time Complexity
    /// *O*(*e*) expected: each endpoint costs one hash lookup, plus a
    /// scan of the nine grid cells around it on a cache miss.
    pub fn from_edges(edges: &'a [Edge]) -> SearchGraph<'a> {
        let mut search_graph = SearchGraph {
            graph: UnGraph::with_capacity(edges.len(), edges.len()),
            resolved: HashMap::with_capacity(edges.len()),
            cells: HashMap::with_capacity(edges.len()),
        };
        for (edge_index, edge) in edges.iter().enumerate() {
            let from = search_graph.resolve_or_insert(&edge.from);
            let to = search_graph.resolve_or_insert(&edge.to);
            search_graph.graph.add_edge(
                from,
                to,
                Hop {
                    weight: edge.weight(),
                    edge_index,
                },
            );
        }
        search_graph
    }

    /// Returns the vertex standing for `node`'s position, if any. When
    /// several vertices are within tolerance, the earliest added wins.
    pub fn resolve(&self, node: &Node) -> Option<NodeIndex> {
        if let Some(index) = self.resolved.get(&node.location) {
            return Some(*index);
        }
        let (cx, cy) = grid_cell(&node.location);
        (cx.saturating_sub(1)..=cx.saturating_add(1))
            .flat_map(|x| (cy.saturating_sub(1)..=cy.saturating_add(1)).map(move |y| (x, y)))
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .filter(|index| same_location(&self.graph[**index].location, &node.location))
            .min()
            .copied()
    }

    /// Returns the vertex standing for `node`'s position, adding `node`
    /// as a new vertex if none matches.
    pub fn resolve_or_insert(&mut self, node: &'a Node) -> NodeIndex {
        let index = match self.resolve(node) {
            Some(index) => index,
            None => {
                let index = self.graph.add_node(node);
                self.cells
                    .entry(grid_cell(&node.location))
                    .or_default()
                    .push(index);
                index
            }
        };
        self.resolved.entry(node.location).or_insert(index);
        index
    }

    /// The canonical node of a vertex.
    pub fn node(&self, index: NodeIndex) -> &'a Node {
        self.graph[index]
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbors of `index` along with the hop leading to each.
    /// A self loop yields `index` itself.
    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, Hop)> + '_ {
        self.graph.edges(index).map(move |edge| {
            let other = if edge.source() == index {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }
}
