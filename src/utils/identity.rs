//! Coordinate based node identity.
//!
//! The same campus point is usually loaded as several independent
//! [`Node`](crate::node::Node) values, one per edge that references
//! it. Comparing positions within [`COORDINATE_EPSILON`] is what makes
//! those values resolve to a single vertex during search.

use crate::location::Location;

/// Tolerance under which two coordinates are considered equal.
pub const COORDINATE_EPSILON: f64 = 0.0000001;

/// Whether two locations are the same point within
/// [`COORDINATE_EPSILON`] on both axes.
///
/// Not transitive: three points spaced just under the tolerance apart
/// can match pairwise without the outer two matching.
pub fn same_location(a: &Location, b: &Location) -> bool {
    (a.x.into_inner() - b.x.into_inner()).abs() < COORDINATE_EPSILON
        && (a.y.into_inner() - b.y.into_inner()).abs() < COORDINATE_EPSILON
}

/// Straight-line distance in coordinate units.
pub fn euclidean_distance(a: &Location, b: &Location) -> f64 {
    let dx = a.x.into_inner() - b.x.into_inner();
    let dy = a.y.into_inner() - b.y.into_inner();
    (dx * dx + dy * dy).sqrt()
}
