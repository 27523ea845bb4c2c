use geo::{Distance, Haversine};
use vendorhub_core::models::GeoPoint;

use crate::models::to_geo_point;

/// Great-circle distance between two points in kilometers.
///
/// Inputs are finite WGS 84 degrees by contract; out-of-range values produce
/// a mathematically defined but semantically meaningless result. Validation
/// belongs upstream (see [`crate::validation`]).
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    Haversine.distance(to_geo_point(from), to_geo_point(to)) / 1000.0
}

/// Check whether `point` lies within `radius_km` of `center`.
pub fn within_radius_km(center: GeoPoint, point: GeoPoint, radius_km: f64) -> bool {
    distance_km(center, point) <= radius_km
}
