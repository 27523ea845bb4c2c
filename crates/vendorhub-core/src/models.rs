pub mod geo;
pub mod supplier;

pub use geo::{Distance, DistanceUnit, GeoPoint};
pub use supplier::{SupplierId, SupplierListing};
