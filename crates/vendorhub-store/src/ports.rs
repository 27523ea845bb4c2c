use async_trait::async_trait;
use vendorhub_core::error::Result;
use vendorhub_core::models::{SupplierId, SupplierListing};

/// Port for the externally populated supplier data source.
///
/// Listings are validated upstream. Implementations hand them out in catalog
/// order; the ranking core never fetches, validates, or caches listings
/// itself.
#[async_trait]
pub trait SupplierCatalog: Send + Sync {
    /// List all supplier listings in catalog order
    async fn list_suppliers(&self) -> Result<Vec<SupplierListing>>;

    /// Get a single listing by ID
    async fn get_supplier(&self, id: SupplierId) -> Result<Option<SupplierListing>>;

    /// Distinct categories in first-seen order
    async fn categories(&self) -> Result<Vec<String>>;
}
