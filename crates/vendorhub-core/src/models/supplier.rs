//! Supplier listing records as supplied by the marketplace catalog.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Unique identifier for a supplier listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub u64);

/// A marketplace supplier listing.
///
/// Listings arrive externally populated and already validated. The display
/// fields (`name`, `supplier`, `category`, `location`, `availability`,
/// `verified`) are carried verbatim for the presentation layer; the ranking
/// core never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierListing {
    pub id: SupplierId,

    /// Product name
    pub name: String,

    /// Supplying party
    pub supplier: String,

    /// Price per unit, non-negative
    pub price: f64,

    /// Unit label, e.g. "kg" or "liter"
    pub unit: String,

    /// Rating in [0, 5]
    pub rating: f32,

    /// Number of reviews behind the rating
    #[serde(rename = "reviews")]
    pub review_count: u32,

    pub category: String,

    /// Free-text location label, e.g. "Punjab, India"
    pub location: String,

    /// Geographic position of the supplier
    pub coordinates: GeoPoint,

    /// Free-text availability state, e.g. "In Stock"
    pub availability: String,

    /// Minimum order quantity in `unit`s
    #[serde(rename = "minOrder")]
    pub min_order: u32,

    pub verified: bool,
}
