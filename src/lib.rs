//! Campus Routing Library.
//! Holds the campus graph and finds shortest walking routes between
//! two of its locations.

#[macro_use]
extern crate log;

pub mod types {
    pub mod campus;
    pub mod config;
    pub mod edge;
    pub mod location;
    pub mod node;
    pub mod route;
    pub mod router;
}

pub mod utils {
    pub mod graph;
    pub mod haversine;
    pub mod identity;
    pub mod router_state;
}

pub mod algorithms {
    pub mod graph;
}

pub use types::*;
pub use utils::*;

pub use types::campus::{CampusMap, EdgeRecord, NodeRecord};
pub use types::config::{DistanceMode, Heuristic, IterationCap, SearchConfig};
pub use types::edge::Edge;
pub use types::location::Location;
pub use types::node::Node;
pub use types::route::Route;
pub use types::router::engine::Pathfinder;
