//! The core of the router library.
//!
//! The engine module runs the A* search between two campus nodes and
//! rebuilds the resulting [`Route`](crate::route::Route).

/// The router engine module.
pub mod engine {
    use std::cmp::Ordering;
    use std::collections::BinaryHeap;

    use ordered_float::OrderedFloat;
    use petgraph::graph::NodeIndex;

    use crate::{
        algorithms::graph::{Hop, SearchGraph},
        config::{DistanceMode, SearchConfig},
        edge::Edge,
        identity::same_location,
        node::Node,
        route::Route,
    };

    /// Bookkeeping of one vertex, local to a single search.
    #[derive(Debug, Clone, Copy)]
    struct SearchState {
        /// Best known cost from the start.
        cost: f64,
        /// Estimated remaining cost to the goal.
        heuristic: f64,
        /// `cost + heuristic`.
        total: f64,
        /// Previous vertex on the best known path and the hop used.
        parent: Option<(NodeIndex, Hop)>,
        closed: bool,
    }

    impl Default for SearchState {
        fn default() -> Self {
            SearchState {
                cost: f64::INFINITY,
                heuristic: 0.0,
                total: f64::INFINITY,
                parent: None,
                closed: false,
            }
        }
    }

    /// Open set entry. Ordered so that [`BinaryHeap`] pops the lowest
    /// total first and, among equal totals, the earliest pushed.
    #[derive(Debug, PartialEq, Eq)]
    struct OpenEntry {
        total: OrderedFloat<f64>,
        sequence: u64,
        index: NodeIndex,
    }

    impl Ord for OpenEntry {
        fn cmp(&self, other: &Self) -> Ordering {
            other
                .total
                .cmp(&self.total)
                .then_with(|| other.sequence.cmp(&self.sequence))
        }
    }

    impl PartialOrd for OpenEntry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    /// Finds shortest routes over an edge list.
    ///
    /// A `Pathfinder` holds no per-search state, so one instance can
    /// serve any number of searches, concurrently included.
    #[derive(Debug, Clone, Default)]
    pub struct Pathfinder {
        config: SearchConfig,
    }

    impl Pathfinder {
        /// Creates a pathfinder with the given configuration.
        pub fn new(config: SearchConfig) -> Pathfinder {
            Pathfinder { config }
        }

        /// Find the shortest route between two nodes.
        ///
        /// Nodes are matched by position, so `start` and `goal` do not
        /// need to be the same values as the edge endpoints.
        ///
        /// # Arguments
        /// * `start` - The node to start from.
        /// * `goal` - The node to end at.
        /// * `edges` - The undirected, non-negatively weighted edges
        ///   to search.
        ///
        /// # Returns
        /// The route from `start` to `goal` and its distance.
        ///
        /// An empty route with a distance of 0.0 is returned if no path
        /// is found or the iteration cap is hit.
        ///
        /// A single node route with a distance of 0.0 is returned if
        /// `start` and `goal` are the same node.
        pub fn find_route(&self, start: &Node, goal: &Node, edges: &[Edge]) -> Route {
            info!(
                "Starting A* search from {} to {} over {} edges",
                start.name,
                goal.name,
                edges.len()
            );

            let mut graph = SearchGraph::from_edges(edges);
            let start_index = graph.resolve_or_insert(start);
            let mut states = vec![SearchState::default(); graph.node_count()];
            let max_iterations = self.config.iteration_cap.limit(graph.node_count());
            debug!(
                "nodes: {}, edges: {}, max iterations: {}",
                graph.node_count(),
                graph.edge_count(),
                max_iterations
            );

            let start_heuristic = self
                .config
                .heuristic
                .estimate(&start.location, &goal.location);
            states[start_index.index()] = SearchState {
                cost: 0.0,
                heuristic: start_heuristic,
                total: start_heuristic,
                parent: None,
                closed: false,
            };

            let mut sequence: u64 = 0;
            let mut open = BinaryHeap::new();
            open.push(OpenEntry {
                total: OrderedFloat(start_heuristic),
                sequence,
                index: start_index,
            });

            let mut iterations = 0;
            while iterations < max_iterations {
                let Some(OpenEntry { total, index, .. }) = open.pop() else {
                    debug!("Open set exhausted after {} iterations", iterations);
                    break;
                };
                let current = states[index.index()];
                // Superseded by a cheaper push of the same vertex.
                if current.closed || total.into_inner() != current.total {
                    continue;
                }
                iterations += 1;

                let current_node = graph.node(index);
                if same_location(&current_node.location, &goal.location) {
                    debug!("Goal reached after {} iterations", iterations);
                    return self.reconstruct_route(&graph, &states, index, edges);
                }
                states[index.index()].closed = true;

                for (neighbor, hop) in graph.neighbors(index) {
                    let state = &mut states[neighbor.index()];
                    if state.closed {
                        continue;
                    }

                    let tentative_cost = current.cost + hop.weight;
                    if tentative_cost < state.cost {
                        let heuristic = self
                            .config
                            .heuristic
                            .estimate(&graph.node(neighbor).location, &goal.location);
                        *state = SearchState {
                            cost: tentative_cost,
                            heuristic,
                            total: tentative_cost + heuristic,
                            parent: Some((index, hop)),
                            closed: false,
                        };
                        sequence += 1;
                        open.push(OpenEntry {
                            total: OrderedFloat(state.total),
                            sequence,
                            index: neighbor,
                        });
                    }
                }
            }

            if iterations >= max_iterations && !open.is_empty() {
                warn!(
                    "Search from {} to {} stopped at the iteration cap ({})",
                    start.name, goal.name, max_iterations
                );
            }
            info!("No route found from {} to {}", start.name, goal.name);
            Route::empty()
        }

        /// Walks the parent links back from the goal and computes the
        /// distance according to the configured [`DistanceMode`].
        fn reconstruct_route(
            &self,
            graph: &SearchGraph,
            states: &[SearchState],
            goal_index: NodeIndex,
            edges: &[Edge],
        ) -> Route {
            let mut nodes = Vec::new();
            let mut relaxed_distance = 0.0;
            let mut current = Some(goal_index);
            while let Some(index) = current {
                nodes.push(graph.node(index).clone());
                current = states[index.index()].parent.map(|(parent, hop)| {
                    relaxed_distance += hop.weight;
                    parent
                });
            }
            nodes.reverse();

            let distance = match self.config.distance_mode {
                DistanceMode::RelaxedCost => relaxed_distance,
                DistanceMode::FirstMatchingEdge => first_matching_edge_distance(&nodes, edges),
            };

            info!(
                "Route found: {} nodes, total distance {:.2}",
                nodes.len(),
                distance
            );
            debug!("route: {:?}", nodes.iter().map(|n| &n.name).collect::<Vec<_>>());
            Route { nodes, distance }
        }
    }

    /// Sums, for each consecutive pair of `nodes`, the weight of the
    /// first edge in `edges` joining the pair in either direction.
    pub fn first_matching_edge_distance(nodes: &[Node], edges: &[Edge]) -> f64 {
        nodes
            .windows(2)
            .filter_map(|pair| edges.iter().find(|edge| edge.connects(&pair[0], &pair[1])))
            .map(Edge::weight)
            .sum()
    }
}
