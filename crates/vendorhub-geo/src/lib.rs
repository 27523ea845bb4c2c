//! VendorHub Geo - Great-circle distance and coordinate validation
//!
//! This crate wraps the `geo` crate's Haversine metric for the proximity
//! features of the marketplace.

pub mod models;
pub mod spatial;
pub mod validation;

pub use spatial::{distance_km, within_radius_km};
