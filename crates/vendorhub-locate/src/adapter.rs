//! The one-shot acquisition state machine.

use crate::models::LocationOutcome;
use crate::ports::LocationSensor;

/// Observable state of a single acquisition
#[derive(Debug, Clone, PartialEq)]
pub enum AcquisitionState {
    /// No request outstanding
    Idle,
    /// Request issued, awaiting the host
    Requesting,
    /// Terminal outcome delivered
    Settled(LocationOutcome),
}

/// A single one-shot location request.
///
/// Constructed over the host capability, if any. A host without a capability
/// settles as `Unsupported` without ever issuing a request. One
/// `Acquisition` serves one request; the adapter performs no retries,
/// queuing, or cancellation.
#[derive(Debug)]
pub struct Acquisition<'a, S: LocationSensor> {
    capability: Option<&'a S>,
    state: AcquisitionState,
    requested: bool,
}

impl<'a, S: LocationSensor> Acquisition<'a, S> {
    pub fn new(capability: Option<&'a S>) -> Self {
        Self { capability, state: AcquisitionState::Idle, requested: false }
    }

    pub fn state(&self) -> &AcquisitionState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, AcquisitionState::Settled(_))
    }

    /// Whether this acquisition ever entered `Requesting`
    pub fn was_requested(&self) -> bool {
        self.requested
    }

    /// Drive the request to its terminal outcome.
    ///
    /// Settling an already settled acquisition returns the stored outcome
    /// again without issuing another request.
    pub async fn settle(&mut self) -> LocationOutcome {
        if let AcquisitionState::Settled(outcome) = &self.state {
            return outcome.clone();
        }

        let Some(sensor) = self.capability else {
            let outcome = LocationOutcome::Unsupported;
            self.state = AcquisitionState::Settled(outcome.clone());
            tracing::debug!("No location capability, settled as unsupported");
            return outcome;
        };

        self.state = AcquisitionState::Requesting;
        self.requested = true;

        let outcome = match sensor.acquire().await {
            Ok(point) => LocationOutcome::Resolved(point),
            Err(reason) => LocationOutcome::Denied(reason),
        };

        tracing::debug!(?outcome, "Location acquisition settled");
        self.state = AcquisitionState::Settled(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DenialReason;
    use crate::sensors::{DenyingSensor, FixedPositionSensor};
    use vendorhub_core::models::GeoPoint;

    #[tokio::test]
    async fn test_resolves_through_capability() {
        let position = GeoPoint::new(77.209, 28.6139);
        let sensor = FixedPositionSensor::new(position);
        let mut acquisition = Acquisition::new(Some(&sensor));

        assert_eq!(*acquisition.state(), AcquisitionState::Idle);
        let outcome = acquisition.settle().await;

        assert_eq!(outcome, LocationOutcome::Resolved(position));
        assert!(acquisition.was_requested());
        assert!(acquisition.is_settled());
    }

    #[tokio::test]
    async fn test_denial_is_terminal_not_an_error() {
        let sensor = DenyingSensor::permission();
        let mut acquisition = Acquisition::new(Some(&sensor));

        let outcome = acquisition.settle().await;
        assert_eq!(outcome, LocationOutcome::Denied(DenialReason::Permission));
        assert_eq!(*acquisition.state(), AcquisitionState::Settled(outcome));
    }

    #[tokio::test]
    async fn test_missing_capability_never_requests() {
        let mut acquisition: Acquisition<'_, FixedPositionSensor> = Acquisition::new(None);

        let outcome = acquisition.settle().await;
        assert_eq!(outcome, LocationOutcome::Unsupported);
        assert!(!acquisition.was_requested());
    }

    #[tokio::test]
    async fn test_settle_is_idempotent() {
        let position = GeoPoint::new(75.3412, 31.1471);
        let sensor = FixedPositionSensor::new(position);
        let mut acquisition = Acquisition::new(Some(&sensor));

        let first = acquisition.settle().await;
        let second = acquisition.settle().await;
        assert_eq!(first, second);
        assert_eq!(sensor.calls(), 1);
    }
}
