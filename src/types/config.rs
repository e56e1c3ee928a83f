//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::haversine;
use crate::identity::euclidean_distance;
use crate::location::Location;

/// Factor turning coordinate degrees into meters for the default
/// heuristic. Calibrated for geographic coordinates; planar maps need
/// their own scale to keep the estimate admissible.
pub const DEFAULT_HEURISTIC_SCALE: f64 = 100000.0;

/// Estimate of the remaining cost from a node to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Heuristic {
    /// No estimate. The search degrades to Dijkstra.
    Zero,
    /// Euclidean coordinate distance multiplied by `scale`.
    ScaledEuclidean { scale: f64 },
    /// Great-circle distance in meters, for latitude/longitude maps
    /// with edge weights in meters.
    Haversine,
}

impl Heuristic {
    /// Computes the estimate between `from` and `goal`.
    pub fn estimate(&self, from: &Location, goal: &Location) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::ScaledEuclidean { scale } => euclidean_distance(from, goal) * scale,
            Heuristic::Haversine => haversine::distance(from, goal),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::ScaledEuclidean {
            scale: DEFAULT_HEURISTIC_SCALE,
        }
    }
}

/// Upper bound on node expansions for a single search. Reaching it
/// ends the search as if no path existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IterationCap {
    /// Expand until the goal is found or the open set runs dry.
    Unbounded,
    /// `factor` times the number of nodes in the search universe.
    PerNode(usize),
    /// A fixed number of expansions.
    Fixed(usize),
}

impl IterationCap {
    /// Resolves the cap for a universe of `node_count` nodes.
    pub fn limit(&self, node_count: usize) -> usize {
        match self {
            IterationCap::Unbounded => usize::MAX,
            IterationCap::PerNode(factor) => node_count.saturating_mul(*factor),
            IterationCap::Fixed(limit) => *limit,
        }
    }
}

impl Default for IterationCap {
    fn default() -> Self {
        IterationCap::PerNode(2)
    }
}

/// How the reported route distance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Sum the weights of the edges the search actually relaxed. This
    /// always equals the cost the search optimized.
    #[default]
    RelaxedCost,
    /// For each consecutive pair of route nodes, add the weight of the
    /// first edge in the edge list joining them. Differs from
    /// `RelaxedCost` only when parallel edges carry different weights.
    FirstMatchingEdge,
}

/// Configuration for a [`crate::router::engine::Pathfinder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Remaining cost estimate used to order the open set.
    pub heuristic: Heuristic,
    /// Guard rail on the number of expansions.
    pub iteration_cap: IterationCap,
    /// Distance reported with the route.
    pub distance_mode: DistanceMode,
}
