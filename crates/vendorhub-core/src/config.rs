use crate::error::{Result, VendorHubError};
use crate::models::{DistanceUnit, GeoPoint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the marketplace host
///
/// Precedence: environment variables > config file > defaults.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Unit used when displaying supplier distances
    pub distance_unit: ConfigValue<DistanceUnit>,
    /// How many ranked suppliers the host shows in the nearest list
    pub nearest_limit: ConfigValue<usize>,
    /// Map center used when no observer coordinate exists
    pub default_center: ConfigValue<GeoPoint>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            distance_unit: ConfigValue::new(DistanceUnit::Kilometers, ConfigSource::Default),
            nearest_limit: ConfigValue::new(10, ConfigSource::Default),
            // Center of India, the fallback view of the original map
            default_center: ConfigValue::new(
                GeoPoint::new(78.9629, 20.5937),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| VendorHubError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| VendorHubError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(distance_unit) = file_config.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::File);
        }

        if let Some(nearest_limit) = file_config.nearest_limit {
            self.nearest_limit.update(nearest_limit, ConfigSource::File);
        }

        if let Some(coordinates) = file_config.default_center {
            let center = GeoPoint::from(coordinates);
            if !center.in_bounds() {
                return Err(VendorHubError::ConfigInvalid {
                    key: "default_center".to_string(),
                    reason: format!(
                        "Coordinates [{}, {}] outside [-180,180]/[-90,90]",
                        center.lon, center.lat
                    ),
                });
            }
            self.default_center.update(center, ConfigSource::File);
        }

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");
        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // VENDORHUB_DISTANCE_UNIT
        if let Ok(unit_str) = env::var("VENDORHUB_DISTANCE_UNIT") {
            match parse_distance_unit(&unit_str) {
                Ok(unit) => self.distance_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VENDORHUB_DISTANCE_UNIT value '{}': expected meters, kilometers, or miles",
                    unit_str
                ),
            }
        }

        // VENDORHUB_NEAREST_LIMIT
        if let Ok(limit_str) = env::var("VENDORHUB_NEAREST_LIMIT") {
            match limit_str.parse::<usize>() {
                Ok(limit) => self.nearest_limit.update(limit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VENDORHUB_NEAREST_LIMIT value '{}': expected non-negative integer",
                    limit_str
                ),
            }
        }

        // VENDORHUB_DEFAULT_CENTER
        if let Ok(center_str) = env::var("VENDORHUB_DEFAULT_CENTER") {
            match parse_center(&center_str) {
                Ok(center) => self.default_center.update(center, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VENDORHUB_DEFAULT_CENTER value '{}': expected 'lon,lat' in degrees",
                    center_str
                ),
            }
        }

        self
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "distance_unit".to_string(),
            (format!("{:?}", self.distance_unit.value), self.distance_unit.source),
        );

        map.insert(
            "nearest_limit".to_string(),
            (self.nearest_limit.value.to_string(), self.nearest_limit.source),
        );

        map.insert(
            "default_center".to_string(),
            (
                format!(
                    "[{}, {}]",
                    self.default_center.value.lon, self.default_center.value.lat
                ),
                self.default_center.source,
            ),
        );

        map
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    distance_unit: Option<DistanceUnit>,
    nearest_limit: Option<usize>,
    default_center: Option<[f64; 2]>,
}

/// Parse distance unit from string
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    match s.to_lowercase().as_str() {
        "meters" | "m" => Ok(DistanceUnit::Meters),
        "kilometers" | "km" => Ok(DistanceUnit::Kilometers),
        "miles" | "mi" => Ok(DistanceUnit::Miles),
        _ => Err(VendorHubError::ConfigInvalid {
            key: "distance_unit".to_string(),
            reason: format!("Invalid distance unit: {}. Use meters, kilometers, or miles", s),
        }),
    }
}

/// Parse a "lon,lat" degree pair
pub fn parse_center(s: &str) -> Result<GeoPoint> {
    let invalid = |reason: String| VendorHubError::ConfigInvalid {
        key: "default_center".to_string(),
        reason,
    };

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(invalid(format!("Expected 'lon,lat', got '{}'", s)));
    }

    let lon = parts[0]
        .parse::<f64>()
        .map_err(|e| invalid(format!("Invalid longitude '{}': {}", parts[0], e)))?;
    let lat = parts[1]
        .parse::<f64>()
        .map_err(|e| invalid(format!("Invalid latitude '{}': {}", parts[1], e)))?;

    let center = GeoPoint::new(lon, lat);
    if !center.in_bounds() {
        return Err(invalid(format!(
            "Coordinates [{}, {}] outside [-180,180]/[-90,90]",
            lon, lat
        )));
    }

    Ok(center)
}
