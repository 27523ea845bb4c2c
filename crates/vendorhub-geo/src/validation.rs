use vendorhub_core::models::GeoPoint;

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }
}

/// Validate a geographic point before it enters the ranking core.
///
/// Supplier coordinates are expected to be validated by the data source;
/// this is the check hosts run on coordinates they accept from elsewhere
/// (configuration, user input).
pub fn validate_point(point: GeoPoint) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !point.lon.is_finite() || !point.lat.is_finite() {
        result.add_error(
            format!("Point({}, {})", point.lon, point.lat),
            "Coordinates must be finite".to_string(),
        );
        return result;
    }

    if !(-180.0..=180.0).contains(&point.lon) {
        result.add_error(
            format!("Point({}, {})", point.lon, point.lat),
            "Longitude must be within [-180, 180] degrees".to_string(),
        );
    }

    if !(-90.0..=90.0).contains(&point.lat) {
        result.add_error(
            format!("Point({}, {})", point.lon, point.lat),
            "Latitude must be within [-90, 90] degrees".to_string(),
        );
    }

    result
}
