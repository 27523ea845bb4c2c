//! Query and result models for the marketplace pipeline.

use serde::{Deserialize, Serialize};
use vendorhub_core::models::{GeoPoint, SupplierListing};
use vendorhub_locate::LocationOutcome;

/// Sort order for marketplace browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Relevance,
    /// Price ascending
    PriceLowHigh,
    /// Price descending
    PriceHighLow,
    /// Highest rated first
    Rating,
}

/// Filter and sort settings for browsing the marketplace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketQuery {
    /// Case-insensitive search over product and supplier names
    pub search: Option<String>,

    /// Restrict to one category; `None` means all categories
    pub category: Option<String>,

    #[serde(default)]
    pub sort: SortOrder,
}

impl MarketQuery {
    /// Create an empty query matching everything in catalog order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Check if a listing matches the search and category constraints
    pub fn matches(&self, listing: &SupplierListing) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_name = listing.name.to_lowercase().contains(&term);
            let in_supplier = listing.supplier.to_lowercase().contains(&term);
            if !in_name && !in_supplier {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if listing.category != *category {
                return false;
            }
        }

        true
    }

    /// Filter and sort listings according to this query.
    ///
    /// Sorts are stable: listings that compare equal keep catalog order.
    pub fn apply(&self, listings: &[SupplierListing]) -> Vec<SupplierListing> {
        let mut matched: Vec<SupplierListing> =
            listings.iter().filter(|listing| self.matches(listing)).cloned().collect();

        match self.sort {
            SortOrder::Relevance => {}
            SortOrder::PriceLowHigh => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHighLow => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        matched
    }
}

/// A listing annotated with its distance from the observer.
///
/// Ranking never mutates its input; the listing fields are carried through
/// unchanged with the computed distance attached alongside. The distance is
/// output metadata, recomputed on every ranking call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSupplier {
    #[serde(flatten)]
    pub listing: SupplierListing,

    /// Distance from the observer in kilometers; absent without an observer
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Ranked suppliers together with how the observer coordinate was (or was
/// not) obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityRanking {
    pub suppliers: Vec<RankedSupplier>,

    /// Terminal outcome of the location acquisition
    pub outcome: LocationOutcome,
}

impl ProximityRanking {
    /// The observer coordinate, when one was resolved
    pub fn observer(&self) -> Option<GeoPoint> {
        self.outcome.coordinate()
    }

    /// The closest suppliers, capped at `limit`.
    ///
    /// Hosts typically pass `LayeredConfig::nearest_limit` here.
    pub fn take_nearest(&self, limit: usize) -> &[RankedSupplier] {
        &self.suppliers[..self.suppliers.len().min(limit)]
    }
}
