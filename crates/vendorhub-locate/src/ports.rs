use async_trait::async_trait;

use crate::models::SensorReading;

/// Port for the host environment's location-sensing capability.
///
/// One call delivers exactly one reading. The capability performs no retries
/// and imposes no timeout of its own; if it never responds, the caller's
/// acquisition stays in `Requesting`.
#[async_trait]
pub trait LocationSensor: Send + Sync {
    /// Request one coordinate from the host
    async fn acquire(&self) -> SensorReading;
}
