//! VendorHub Store - Supplier catalog port and adapters
//!
//! This crate defines the supplier data source port and provides the
//! in-memory adapter used for development and testing.

pub mod memory;
pub mod ports;

pub use memory::MemoryCatalog;
pub use ports::SupplierCatalog;
