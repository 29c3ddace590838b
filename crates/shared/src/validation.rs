//! Coordinate and geofence validation.
//!
//! These checks are used both by the request DTOs (via `validator` custom
//! functions) and by the core services, so malformed values are rejected
//! regardless of which path they arrive on.

use validator::ValidationError;

/// Validates that a latitude is a finite number in [-90, 90].
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude is a finite number in [-180, 180].
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a geofence radius is strictly positive.
///
/// A zero or negative radius would classify every sample as a violation,
/// so it is rejected at creation time and never reaches evaluation.
pub fn validate_radius_km(radius: f64) -> Result<(), ValidationError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_positive");
        err.message = Some("Radius must be a positive number of kilometers".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_non_finite() {
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_latitude(f64::INFINITY).is_err());
        assert!(validate_latitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_longitude_non_finite() {
        assert!(validate_longitude(f64::NAN).is_err());
        assert!(validate_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_longitude_error_message() {
        let err = validate_longitude(200.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Longitude must be between -180 and 180"
        );
    }

    #[test]
    fn test_validate_radius_km() {
        assert!(validate_radius_km(0.5).is_ok());
        assert!(validate_radius_km(50000.0).is_ok());
        assert!(validate_radius_km(0.0).is_err());
        assert!(validate_radius_km(-1.0).is_err());
        assert!(validate_radius_km(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_radius_error_message() {
        let err = validate_radius_km(0.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Radius must be a positive number of kilometers"
        );
    }
}
