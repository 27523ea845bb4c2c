//! In-memory catalog for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. Production hosts implement [`SupplierCatalog`]
//! over their real data source.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use vendorhub_core::error::Result;
use vendorhub_core::models::{SupplierId, SupplierListing};

use crate::ports::SupplierCatalog;

/// In-memory implementation of SupplierCatalog preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    listings: Arc<RwLock<Vec<SupplierListing>>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with listings
    pub fn with_listings(listings: Vec<SupplierListing>) -> Self {
        Self { listings: Arc::new(RwLock::new(listings)) }
    }

    /// Insert or replace a listing, keyed by ID. New listings append.
    pub fn upsert(&self, listing: SupplierListing) {
        let mut listings = self.listings.write().unwrap();
        match listings.iter_mut().find(|existing| existing.id == listing.id) {
            Some(slot) => *slot = listing,
            None => listings.push(listing),
        }
    }

    /// Remove a listing by ID, returning it if present
    pub fn remove(&self, id: SupplierId) -> Option<SupplierListing> {
        let mut listings = self.listings.write().unwrap();
        let index = listings.iter().position(|listing| listing.id == id)?;
        Some(listings.remove(index))
    }

    pub fn len(&self) -> usize {
        self.listings.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.read().unwrap().is_empty()
    }
}

#[async_trait]
impl SupplierCatalog for MemoryCatalog {
    async fn list_suppliers(&self) -> Result<Vec<SupplierListing>> {
        Ok(self.listings.read().unwrap().clone())
    }

    async fn get_supplier(&self, id: SupplierId) -> Result<Option<SupplierListing>> {
        let listings = self.listings.read().unwrap();
        Ok(listings.iter().find(|listing| listing.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let listings = self.listings.read().unwrap();
        let mut seen: Vec<String> = Vec::new();
        for listing in listings.iter() {
            if !seen.contains(&listing.category) {
                seen.push(listing.category.clone());
            }
        }
        Ok(seen)
    }
}
