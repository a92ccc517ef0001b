//! Geographic observation point.

use serde::{Deserialize, Serialize};

/// Geographic coordinates plus the UTC offset valid at the instant of use.
///
/// Offsets are not constant across DST boundaries; whoever resolves a place
/// name supplies the offset applicable at the queried instant. The engine
/// only ever sees fully-resolved points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// UTC offset in hours at the relevant instant, east positive.
    pub utc_offset_hours: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Validate coordinate and offset ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be within [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be within [-180, 180]");
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err("utc offset must be within [-14, 14] hours");
        }
        Ok(())
    }
}
