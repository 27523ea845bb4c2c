//! VendorHub Core - Domain models, configuration, and error types
//!
//! This crate contains the shared domain types and error handling for the
//! VendorHub supplier-proximity crates.

pub mod config;
pub mod error;
pub mod models;

pub use error::{Result, VendorHubError};
