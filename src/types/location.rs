//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is the coordinate pair of a campus point. Typically,
/// this type is used in tandem with the [`Node`](`super::node::Node`)
/// type.
///
/// The engine does not care whether `x`/`y` hold latitude/longitude
/// or planar coordinates. Only the heuristics interpret them.
///
/// The derived equality is exact and is only meant for keying maps.
/// Node identity uses [`crate::identity::same_location`] instead.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Location {
    /// First coordinate (latitude for geographic maps).
    pub x: OrderedFloat<f64>,

    /// Second coordinate (longitude for geographic maps).
    pub y: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from raw coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Location {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Location::new(x, y)
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_deserialize_location() {
        let location: Location = serde_json::from_str(r#"{"x": 37.2284, "y": -80.4234}"#).unwrap();
        assert_eq!(location, Location::new(37.2284, -80.4234));
        assert_eq!(Location::from((37.2284, -80.4234)), location);
    }
}
