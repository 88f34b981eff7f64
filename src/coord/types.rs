//! Coordinate type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic coordinate (WGS 84 latitude/longitude).
///
/// Immutable once resolved for a session. There is deliberately no
/// `Default` impl: an unresolved position is represented as
/// `Option<Coordinate>::None`, never as a `{0, 0}` placeholder, so a
/// legitimate equatorial coordinate stays unambiguous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate after validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) || !latitude.is_finite() {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) || !longitude.is_finite() {
            return Err(CoordError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Errors that can occur during coordinate construction.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
