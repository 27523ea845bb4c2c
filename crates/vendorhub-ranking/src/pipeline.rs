//! Marketplace pipeline orchestrating catalog, location, and ranking.

use vendorhub_core::error::{Result, VendorHubError};
use vendorhub_core::models::{GeoPoint, SupplierId, SupplierListing};
use vendorhub_geo::distance_km;
use vendorhub_locate::{Acquisition, LocationSensor};
use vendorhub_store::SupplierCatalog;

use crate::models::{MarketQuery, ProximityRanking, RankedSupplier};

/// Attach observer distances and sort ascending.
///
/// With no observer the input order is preserved and no distance is
/// attached. The sort is stable: listings at identical distances keep their
/// catalog order. Input listings are never mutated.
pub fn rank_by_distance(
    listings: &[SupplierListing],
    observer: Option<GeoPoint>,
) -> Vec<RankedSupplier> {
    let Some(observer) = observer else {
        return listings
            .iter()
            .map(|listing| RankedSupplier { listing: listing.clone(), distance_km: None })
            .collect();
    };

    let mut measured: Vec<(f64, &SupplierListing)> = listings
        .iter()
        .map(|listing| (distance_km(observer, listing.coordinates), listing))
        .collect();

    measured.sort_by(|a, b| a.0.total_cmp(&b.0));

    measured
        .into_iter()
        .map(|(km, listing)| RankedSupplier { listing: listing.clone(), distance_km: Some(km) })
        .collect()
}

/// Marketplace pipeline over a supplier catalog and an optional location
/// capability.
///
/// The capability is `None` for hosts without location support; `nearest`
/// then settles as `Unsupported` and keeps catalog order.
pub struct MarketplacePipeline<C, L>
where
    C: SupplierCatalog,
    L: LocationSensor,
{
    catalog: C,
    capability: Option<L>,
}

impl<C, L> MarketplacePipeline<C, L>
where
    C: SupplierCatalog,
    L: LocationSensor,
{
    /// Create a new pipeline
    pub fn new(catalog: C, capability: Option<L>) -> Self {
        Self { catalog, capability }
    }

    /// Browse the marketplace: filter and sort listings per the query
    pub async fn browse(&self, query: &MarketQuery) -> Result<Vec<SupplierListing>> {
        let listings = self.catalog.list_suppliers().await?;
        let matched = query.apply(&listings);
        tracing::debug!(total = listings.len(), matched = matched.len(), "Marketplace browse");
        Ok(matched)
    }

    /// Rank suppliers by proximity to a freshly acquired observer
    /// coordinate.
    ///
    /// The acquisition is one-shot and performed anew on every call; denied
    /// and unsupported outcomes degrade to catalog order with no distances
    /// attached.
    pub async fn nearest(&self) -> Result<ProximityRanking> {
        let listings = self.catalog.list_suppliers().await?;

        let mut acquisition = Acquisition::new(self.capability.as_ref());
        let outcome = acquisition.settle().await;
        let observer = outcome.coordinate();

        match observer {
            Some(point) => tracing::info!(
                lon = point.lon,
                lat = point.lat,
                suppliers = listings.len(),
                "Ranking suppliers by distance"
            ),
            None => {
                tracing::info!(?outcome, "Location unavailable, keeping catalog order")
            }
        }

        let suppliers = rank_by_distance(&listings, observer);
        Ok(ProximityRanking { suppliers, outcome })
    }

    /// Fetch one listing and annotate it with its distance from `observer`.
    ///
    /// Backs single-record display without a full re-rank.
    pub async fn annotate(&self, id: SupplierId, observer: GeoPoint) -> Result<RankedSupplier> {
        let listing = self
            .catalog
            .get_supplier(id)
            .await?
            .ok_or(VendorHubError::SupplierNotFound { id: id.0 })?;

        let km = distance_km(observer, listing.coordinates);
        Ok(RankedSupplier { listing, distance_km: Some(km) })
    }
}
