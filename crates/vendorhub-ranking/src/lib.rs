//! VendorHub Ranking - Marketplace queries and proximity ranking
//!
//! This crate implements the marketplace use cases, orchestrating the
//! supplier catalog, location acquisition, and distance ranking.

pub mod models;
pub mod pipeline;

pub use models::{MarketQuery, ProximityRanking, RankedSupplier, SortOrder};
pub use pipeline::{rank_by_distance, MarketplacePipeline};
