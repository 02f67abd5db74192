//! Great-circle distance.

use crate::models::Coordinates;

/// Mean Earth radius used by [`haversine`], in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
///
/// # Examples
///
/// ```
/// use tsp_graph::distance::haversine;
/// use tsp_graph::models::Coordinates;
///
/// let a = Coordinates::new(0.0, 0.0);
/// let b = Coordinates::new(0.0, 1.0);
/// // One degree of longitude on the equator is about 111.2 km.
/// assert!((haversine(a, b) - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_M * c
}
