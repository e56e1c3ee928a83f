//! Stores the state of the router
//!
//! A process holds one campus map. It is set once by the map loader
//! and shared read only with the UI layer afterward.

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::campus::{CampusMap, EdgeRecord, NodeRecord};
use crate::config::SearchConfig;
use crate::location::Location;
use crate::node::Node;
use crate::route::Route;
use crate::router::engine::Pathfinder;

/// Campus map used for routing
pub static CAMPUS_MAP: OnceCell<CampusMap> = OnceCell::new();
/// Walking route pathfinder
pub static CAMPUS_PATHFINDER: OnceCell<Pathfinder> = OnceCell::new();

/// Errors raised by the router state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterStateError {
    /// The campus map has not been loaded yet.
    #[error("Campus map not initialized. Try to initialize it first.")]
    NotInitialized,
    /// The campus map was already loaded.
    #[error("Campus map already initialized.")]
    AlreadyInitialized,
    /// No node carries the requested name.
    #[error("Node not found by name: {0}")]
    NodeNotFound(String),
    /// The campus map holds no nodes.
    #[error("Campus map has no nodes")]
    EmptyMap,
}

/// Query struct to find a route between two nodes
#[derive(Debug, Copy, Clone)]
pub struct RouteQuery {
    ///from
    pub from: &'static Node,
    ///to
    pub to: &'static Node,
}

/// Initializes the campus map and the pathfinder
pub fn init_campus_map(
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    config: SearchConfig,
) -> Result<(), RouterStateError> {
    info!("Initializing campus map");
    if is_campus_map_initialized() {
        error!("Campus map already initialized");
        return Err(RouterStateError::AlreadyInitialized);
    }
    CAMPUS_MAP
        .set(CampusMap::from_records(nodes, edges))
        .map_err(|_| RouterStateError::AlreadyInitialized)?;
    CAMPUS_PATHFINDER
        .set(Pathfinder::new(config))
        .map_err(|_| RouterStateError::AlreadyInitialized)?;
    info!("Campus map initialized");
    Ok(())
}

/// Checks if the campus map is initialized
pub fn is_campus_map_initialized() -> bool {
    CAMPUS_MAP.get().is_some() && CAMPUS_PATHFINDER.get().is_some()
}

/// Gets the campus map
pub fn get_campus_map() -> Result<&'static CampusMap, RouterStateError> {
    CAMPUS_MAP.get().ok_or(RouterStateError::NotInitialized)
}

/// gets node by name
pub fn get_node_by_name(name: &str) -> Result<&'static Node, RouterStateError> {
    debug!("name: {}", name);
    get_campus_map()?
        .node_by_name(name)
        .ok_or_else(|| RouterStateError::NodeNotFound(name.to_string()))
}

/// Takes the locations picked by the user (src and dst) and returns a
/// tuple with the nodes nearest to them
pub fn get_nearest_nodes(
    src_location: &Location,
    dst_location: &Location,
) -> Result<(&'static Node, &'static Node), RouterStateError> {
    info!("Getting nearest nodes");
    debug!("src_location: {:?}", src_location);
    debug!("dst_location: {:?}", dst_location);
    let map = get_campus_map()?;
    let src_node = map
        .nearest_node(src_location)
        .ok_or(RouterStateError::EmptyMap)?;
    let dst_node = map
        .nearest_node(dst_location)
        .ok_or(RouterStateError::EmptyMap)?;
    debug!("src_node: {:?}", src_node);
    debug!("dst_node: {:?}", dst_node);
    Ok((src_node, dst_node))
}

/// Get route
pub fn get_route(req: RouteQuery) -> Result<Route, RouterStateError> {
    info!("Getting route");
    let RouteQuery { from, to } = req;
    let map = get_campus_map()?;
    let pathfinder = CAMPUS_PATHFINDER
        .get()
        .ok_or(RouterStateError::NotInitialized)?;

    let route = pathfinder.find_route(from, to, map.edges());
    debug!("distance: {}", route.distance);
    debug!("node count: {}", route.node_count());
    info!("Finished getting route");
    Ok(route)
}

#[cfg(test)]
mod router_state_tests {
    use super::*;
    use crate::config::Heuristic;

    /// The map is process wide, so the whole lifecycle runs in one test.
    #[test]
    fn test_router_state() {
        // Corners of the Drillfield and a detour through Burruss Hall.
        let nodes = vec![
            NodeRecord {
                name: Some("War Memorial Chapel".to_string()),
                x: 37.22715,
                y: -80.42134,
            },
            NodeRecord {
                name: Some("Burruss Hall".to_string()),
                x: 37.22853,
                y: -80.42371,
            },
            NodeRecord {
                name: Some("Newman Library".to_string()),
                x: 37.22878,
                y: -80.41939,
            },
            NodeRecord {
                name: Some("Squires".to_string()),
                x: 37.22949,
                y: -80.41853,
            },
        ];
        let edges = vec![
            EdgeRecord {
                from: Location::new(37.22715, -80.42134),
                to: Location::new(37.22853, -80.42371),
                weight: 260.0,
            },
            EdgeRecord {
                from: Location::new(37.22853, -80.42371),
                to: Location::new(37.22878, -80.41939),
                weight: 385.0,
            },
            EdgeRecord {
                from: Location::new(37.22715, -80.42134),
                to: Location::new(37.22878, -80.41939),
                weight: 275.0,
            },
        ];

        assert_eq!(
            get_route(RouteQuery {
                from: Box::leak(Box::new(Node::new("x", 0.0, 0.0))),
                to: Box::leak(Box::new(Node::new("y", 1.0, 1.0))),
            })
            .unwrap_err(),
            RouterStateError::NotInitialized
        );

        let config = SearchConfig {
            heuristic: Heuristic::Haversine,
            ..SearchConfig::default()
        };
        init_campus_map(nodes, edges, config.clone()).unwrap();
        assert!(is_campus_map_initialized());
        assert_eq!(
            init_campus_map(vec![], vec![], config),
            Err(RouterStateError::AlreadyInitialized)
        );

        let (src, dst) = get_nearest_nodes(
            &Location::new(37.22710, -80.42140),
            &Location::new(37.22880, -80.41940),
        )
        .unwrap();
        assert_eq!(src.name, "War Memorial Chapel");
        assert_eq!(dst.name, "Newman Library");

        let route = get_route(RouteQuery { from: src, to: dst }).unwrap();
        assert_eq!(route.names(), vec!["War Memorial Chapel", "Newman Library"]);
        assert_eq!(route.distance, 275.0);

        let burruss = get_node_by_name("Burruss Hall").unwrap();
        let squires = get_node_by_name("Squires").unwrap();
        let route = get_route(RouteQuery {
            from: burruss,
            to: squires,
        })
        .unwrap();
        assert!(route.is_empty());
        assert_eq!(route.distance, 0.0);

        assert_eq!(
            get_node_by_name("Goodwin Hall").unwrap_err(),
            RouterStateError::NodeNotFound("Goodwin Hall".to_string())
        );
    }
}
