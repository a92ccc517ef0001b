//! Natal snapshot: the fixed birth reference chart.

use serde::{Deserialize, Serialize};

use selene_ephem::{ALL_BODIES, Body, Ephemeris, GeoPoint, checked_longitude};
use selene_time::Instant;

use crate::angles::chart_angles_deg;
use crate::chart::body_position;
use crate::error::ChartError;

/// A single body's state at a queried instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Apparent backward motion over the following 24 hours.
    pub retrograde: bool,
}

/// The fixed birth reference chart.
///
/// Built once per session; immutable thereafter. The lunar return search
/// only needs the natal Moon longitude from it — houses of the return
/// chart are anchored at the *current* location, not the birth one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalSnapshot {
    pub birth: Instant,
    pub birthplace: GeoPoint,
    /// All 10 bodies in canonical chart order.
    pub positions: [BodyPosition; 10],
    /// Ascendant longitude at birth, degrees [0, 360).
    pub ascendant_deg: f64,
}

impl NatalSnapshot {
    /// Position of a specific body.
    pub fn position(&self, body: Body) -> &BodyPosition {
        &self.positions[body.index() as usize]
    }

    /// The natal Moon's ecliptic longitude — the lunar return target.
    pub fn moon_longitude_deg(&self) -> f64 {
        self.position(selene_ephem::Body::Moon).longitude_deg
    }
}

/// Build the natal snapshot for a birth instant and birthplace.
///
/// The birthplace must already be offset-resolved; fails with
/// `InvalidInput` on malformed coordinates and with the provider's range
/// error if the birth instant falls outside its supported span.
pub fn natal_snapshot<E: Ephemeris>(
    eph: &E,
    birth: Instant,
    birthplace: GeoPoint,
) -> Result<NatalSnapshot, ChartError> {
    birthplace.validate().map_err(ChartError::InvalidInput)?;

    let jd = birth.to_jd();
    let mut positions = [BodyPosition {
        body: Body::Sun,
        longitude_deg: 0.0,
        retrograde: false,
    }; 10];
    for body in ALL_BODIES {
        positions[body.index() as usize] = body_position(eph, body, jd, &birthplace)?;
    }
    let (ascendant_deg, _) = chart_angles_deg(jd, &birthplace);

    Ok(NatalSnapshot {
        birth,
        birthplace,
        positions,
        ascendant_deg,
    })
}

/// Convenience: just the natal Moon longitude, without the full snapshot.
pub fn natal_moon_longitude<E: Ephemeris>(
    eph: &E,
    birth: Instant,
    birthplace: GeoPoint,
) -> Result<f64, ChartError> {
    birthplace.validate().map_err(ChartError::InvalidInput)?;
    Ok(checked_longitude(eph, Body::Moon, birth.to_jd(), &birthplace)?)
}
