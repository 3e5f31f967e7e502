// src/models/location.rs

//! Geographic coordinates supplied by callers.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A validated point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a point, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::validation(format!(
                "latitude must be within [-90, 90], got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::validation(format!(
                "longitude must be within [-180, 180], got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a point from raw query-string values.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let lat = latitude.trim();
        let lng = longitude.trim();
        if lat.is_empty() || lng.is_empty() {
            return Err(AppError::validation("geolocation data is required"));
        }
        let lat: f64 = lat
            .parse()
            .map_err(|_| AppError::validation(format!("invalid latitude '{lat}'")))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| AppError::validation(format!("invalid longitude '{lng}'")))?;
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_point() {
        let point = Coordinates::new(38.898, -77.037).unwrap();
        assert_eq!(point.latitude, 38.898);
        assert_eq!(point.longitude, -77.037);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_parse() {
        assert!(Coordinates::parse("10.5", " -3 ").is_ok());
        assert!(Coordinates::parse("", "1").is_err());
        assert!(Coordinates::parse("north", "1").is_err());
    }
}
