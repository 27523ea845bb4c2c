//! Terminal outcome types for location acquisition.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vendorhub_core::models::GeoPoint;

/// Why the host refused or failed to produce a coordinate
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum DenialReason {
    /// The user or platform denied the location permission
    #[error("location permission denied")]
    Permission,

    /// The position could not be determined (hardware fault, no fix, or a
    /// host-imposed timeout)
    #[error("location unavailable: {detail}")]
    HardwareOrTimeout { detail: String },
}

/// One reading from the host capability: a coordinate or a denial
pub type SensorReading = std::result::Result<GeoPoint, DenialReason>;

/// Terminal result of a location acquisition.
///
/// Exactly one of these is delivered per request. `Denied` and `Unsupported`
/// both degrade to the unranked supplier list; they are kept distinct so the
/// host can word its notice accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationOutcome {
    /// The host produced an observer coordinate
    Resolved(GeoPoint),

    /// The host refused or failed
    Denied(DenialReason),

    /// The host has no location capability at all
    Unsupported,
}

impl LocationOutcome {
    /// The observer coordinate, if the acquisition succeeded
    pub fn coordinate(&self) -> Option<GeoPoint> {
        match self {
            LocationOutcome::Resolved(point) => Some(*point),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationOutcome::Resolved(_))
    }
}
