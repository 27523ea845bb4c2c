//! Conversions between the domain `GeoPoint` and the computational `geo`
//! crate types.

use geo::Point;
use vendorhub_core::models::GeoPoint;

/// Convert a GeoPoint to a geo::Point (x = longitude, y = latitude)
pub fn to_geo_point(point: GeoPoint) -> Point {
    Point::new(point.lon, point.lat)
}

/// Convert a geo::Point back to a GeoPoint
pub fn from_geo_point(point: Point) -> GeoPoint {
    GeoPoint::new(point.x(), point.y())
}

/// Extension trait for GeoPoint with geo-crate operations
pub trait GeoPointExt {
    /// Convert to geo::Point
    fn to_geo(&self) -> Point;
}

impl GeoPointExt for GeoPoint {
    fn to_geo(&self) -> Point {
        to_geo_point(*self)
    }
}
