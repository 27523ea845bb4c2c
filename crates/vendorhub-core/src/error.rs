//! Error types for VendorHub

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorHubError {
    // Catalog errors
    #[error("Supplier not found: {id}")]
    SupplierNotFound { id: u64 },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, VendorHubError>;
