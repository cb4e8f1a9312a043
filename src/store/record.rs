//! Location record type.

use chrono::{DateTime, Utc};

use crate::config::SOURCE_MANUAL;
use crate::error_handling::ValidationError;

/// A single observation gathered by the tracker.
///
/// Records are immutable once built: the store only appends and evicts them.
/// Fields are private so a record handed out by the store cannot be altered
/// and written back.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    latitude: f64,
    longitude: f64,
    label: String,
    source: String,
    created_at: DateTime<Utc>,
}

impl LocationRecord {
    /// Creates a record stamped with the current UTC time, an empty label and
    /// the `manual` source.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if either coordinate is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            label: String::new(),
            source: SOURCE_MANUAL.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Sets the free-text label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the origin tag (`manual`, `seed`, `api`, ...).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Overrides the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Latitude in degrees, within [-90, 90].
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, within [-180, 180].
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Free-text label; may be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Origin tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Creation time in UTC.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Checks that a coordinate pair lies on the globe.
///
/// NaN fails both checks.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_record_defaults() {
        let before = Utc::now();
        let record = LocationRecord::new(3.3415, -76.5295).unwrap();
        assert_eq!(record.label(), "");
        assert_eq!(record.source(), "manual");
        assert!(record.created_at() >= before);
        assert!(record.created_at() <= Utc::now());
    }

    #[test]
    fn test_builder_overrides() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let record = LocationRecord::new(0.0, 0.0)
            .unwrap()
            .with_label("Biblioteca")
            .with_source("seed")
            .with_created_at(ts);
        assert_eq!(record.label(), "Biblioteca");
        assert_eq!(record.source(), "seed");
        assert_eq!(record.created_at(), ts);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        assert_eq!(
            LocationRecord::new(91.0, 0.0).unwrap_err(),
            ValidationError::LatitudeOutOfRange(91.0)
        );
        assert_eq!(
            LocationRecord::new(0.0, -180.01).unwrap_err(),
            ValidationError::LongitudeOutOfRange(-180.01)
        );
    }

    #[test]
    fn test_nan_rejected() {
        assert!(matches!(
            validate_coordinates(f64::NAN, 0.0),
            Err(ValidationError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            validate_coordinates(0.0, f64::NAN),
            Err(ValidationError::LongitudeOutOfRange(_))
        ));
    }
}
