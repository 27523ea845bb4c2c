//! VendorHub Locate - One-shot location acquisition
//!
//! This crate defines the host location capability port, the terminal
//! outcome types, and the acquisition state machine feeding the ranking
//! pipeline.

pub mod adapter;
pub mod models;
pub mod ports;
pub mod sensors;

pub use adapter::{Acquisition, AcquisitionState};
pub use models::{DenialReason, LocationOutcome, SensorReading};
pub use ports::LocationSensor;
pub use sensors::{DenyingSensor, FixedPositionSensor, OneshotSensor, SensorHandle};
