//! Great-circle distance between geographic locations.

use crate::location::Location;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Returns the haversine distance in meters between two locations
/// whose `x` is the latitude and `y` the longitude, both in degrees.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let lat1 = from.x.into_inner().to_radians();
    let lat2 = to.x.into_inner().to_radians();
    let d_lat = (to.x.into_inner() - from.x.into_inner()).to_radians();
    let d_lon = (to.y.into_inner() - from.y.into_inner()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}
