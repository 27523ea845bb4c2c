//! Sensor adapters over the location port.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};
use vendorhub_core::models::GeoPoint;

use crate::models::{DenialReason, SensorReading};
use crate::ports::LocationSensor;

/// Sensor that always resolves to a fixed position.
///
/// For hosts with a known static location, and for testing.
#[derive(Debug)]
pub struct FixedPositionSensor {
    position: GeoPoint,
    calls: AtomicUsize,
}

impl FixedPositionSensor {
    pub fn new(position: GeoPoint) -> Self {
        Self { position, calls: AtomicUsize::new(0) }
    }

    /// How many readings this sensor has delivered
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationSensor for FixedPositionSensor {
    async fn acquire(&self) -> SensorReading {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.position)
    }
}

/// Sensor that always denies, for development and testing
#[derive(Debug, Clone)]
pub struct DenyingSensor {
    reason: DenialReason,
}

impl DenyingSensor {
    /// Deny as a permission refusal
    pub fn permission() -> Self {
        Self { reason: DenialReason::Permission }
    }

    /// Deny as a hardware or timeout failure
    pub fn hardware(detail: impl Into<String>) -> Self {
        Self { reason: DenialReason::HardwareOrTimeout { detail: detail.into() } }
    }
}

#[async_trait]
impl LocationSensor for DenyingSensor {
    async fn acquire(&self) -> SensorReading {
        Err(self.reason.clone())
    }
}

/// Sensor backed by a oneshot channel the host settles.
///
/// The host keeps the [`SensorHandle`] and sends exactly one reading when
/// its platform callback fires. Dropping the handle without sending reads as
/// a hardware failure. One `OneshotSensor` serves a single request.
#[derive(Debug)]
pub struct OneshotSensor {
    receiver: Mutex<Option<oneshot::Receiver<SensorReading>>>,
}

impl OneshotSensor {
    /// Create a sensor and the handle the host settles it with
    pub fn channel() -> (Self, SensorHandle) {
        let (sender, receiver) = oneshot::channel();
        (Self { receiver: Mutex::new(Some(receiver)) }, SensorHandle { sender })
    }
}

#[async_trait]
impl LocationSensor for OneshotSensor {
    async fn acquire(&self) -> SensorReading {
        let receiver = self.receiver.lock().await.take();
        match receiver {
            Some(receiver) => match receiver.await {
                Ok(reading) => reading,
                Err(_) => Err(DenialReason::HardwareOrTimeout {
                    detail: "host dropped the request without responding".to_string(),
                }),
            },
            None => Err(DenialReason::HardwareOrTimeout {
                detail: "sensor already consumed by a previous request".to_string(),
            }),
        }
    }
}

/// Host-side handle settling a [`OneshotSensor`]
#[derive(Debug)]
pub struct SensorHandle {
    sender: oneshot::Sender<SensorReading>,
}

impl SensorHandle {
    /// Deliver a coordinate
    pub fn resolve(self, position: GeoPoint) {
        let _ = self.sender.send(Ok(position));
    }

    /// Deliver a denial
    pub fn deny(self, reason: DenialReason) {
        let _ = self.sender.send(Err(reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_sensor_resolves() {
        let position = GeoPoint::new(76.2711, 10.8505);
        let sensor = FixedPositionSensor::new(position);
        assert_eq!(sensor.acquire().await, Ok(position));
        assert_eq!(sensor.calls(), 1);
    }

    #[tokio::test]
    async fn test_denying_sensor() {
        let sensor = DenyingSensor::hardware("no GPS fix");
        let reading = sensor.acquire().await;
        assert_eq!(
            reading,
            Err(DenialReason::HardwareOrTimeout { detail: "no GPS fix".to_string() })
        );
    }

    #[tokio::test]
    async fn test_oneshot_sensor_resolves() {
        let (sensor, handle) = OneshotSensor::channel();
        let position = GeoPoint::new(72.8777, 19.076);

        handle.resolve(position);
        assert_eq!(sensor.acquire().await, Ok(position));
    }

    #[tokio::test]
    async fn test_oneshot_sensor_denies() {
        let (sensor, handle) = OneshotSensor::channel();

        handle.deny(DenialReason::Permission);
        assert_eq!(sensor.acquire().await, Err(DenialReason::Permission));
    }

    #[tokio::test]
    async fn test_oneshot_dropped_handle_is_hardware_denial() {
        let (sensor, handle) = OneshotSensor::channel();
        drop(handle);

        let reading = sensor.acquire().await;
        assert!(matches!(reading, Err(DenialReason::HardwareOrTimeout { .. })));
    }

    #[tokio::test]
    async fn test_oneshot_second_acquire_is_denied() {
        let (sensor, handle) = OneshotSensor::channel();
        handle.resolve(GeoPoint::new(0.0, 0.0));

        sensor.acquire().await.unwrap();
        let second = sensor.acquire().await;
        assert!(matches!(second, Err(DenialReason::HardwareOrTimeout { .. })));
    }

    #[tokio::test]
    async fn test_oneshot_resolves_while_request_pending() {
        let (sensor, handle) = OneshotSensor::channel();
        let position = GeoPoint::new(77.209, 28.6139);

        let pending = tokio::spawn(async move { sensor.acquire().await });
        tokio::task::yield_now().await;
        handle.resolve(position);

        assert_eq!(pending.await.unwrap(), Ok(position));
    }
}
