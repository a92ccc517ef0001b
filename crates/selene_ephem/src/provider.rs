//! The ephemeris provider seam and the built-in analytic provider.

use selene_time::jd_to_centuries;

use crate::angle::normalize_deg;
use crate::body::Body;
use crate::error::EphemError;
use crate::geo::GeoPoint;
use crate::kepler::{Orbit, heliocentric_position};
use crate::moon::moon_longitude_deg;

/// A source of ecliptic longitudes.
///
/// Implementations must be deterministic: identical `(body, jd_utc, geo)`
/// inputs always yield the same longitude. All chart and search functions
/// are generic over this trait, so tests can substitute synthetic models.
pub trait Ephemeris {
    /// Ecliptic longitude of `body` in degrees at a UTC Julian Date, as
    /// seen from `geo`. Implementations may return any representative of
    /// the angle; callers normalize.
    fn ecliptic_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        geo: &GeoPoint,
    ) -> Result<f64, EphemError>;

    /// Inclusive `(min_jd, max_jd)` range this provider supports.
    fn supported_jd_range(&self) -> (f64, f64);
}

/// Query a longitude with range, finiteness, and normalization enforced.
///
/// Every read in the engine goes through here: a NaN or infinite value
/// from a provider aborts the computation instead of leaking into
/// aspect or dominance math.
pub fn checked_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd_utc: f64,
    geo: &GeoPoint,
) -> Result<f64, EphemError> {
    let (min_jd, max_jd) = eph.supported_jd_range();
    if !jd_utc.is_finite() || jd_utc < min_jd || jd_utc > max_jd {
        return Err(EphemError::EpochOutOfRange { jd_utc });
    }
    let lon = eph.ecliptic_longitude(body, jd_utc, geo)?;
    if !lon.is_finite() {
        return Err(EphemError::NonFiniteLongitude { body });
    }
    Ok(normalize_deg(lon))
}

/// JD of 1800-Jan-01 00:00 UTC, start of the mean-element validity span.
const MIN_JD: f64 = 2_378_496.5;
/// JD of 2050-Jan-01 00:00 UTC, end of the mean-element validity span.
const MAX_JD: f64 = 2_469_807.5;

/// Built-in analytic ephemeris: Keplerian mean elements for the planets,
/// a truncated lunar series for the Moon.
///
/// Positions are geocentric. The observer point is accepted for interface
/// compatibility but not used: topocentric parallax (below 1 degree even
/// for the Moon) is under this model's accuracy contract, and ecliptic
/// longitude is what charts consume. Stateless, so freely shareable
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementEphemeris;

impl MeanElementEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric longitude of a planet from heliocentric positions of
    /// the planet and the Earth-Moon barycenter.
    fn planet_longitude(orbit: Orbit, t: f64) -> f64 {
        let planet = heliocentric_position(orbit, t);
        let earth = heliocentric_position(Orbit::EarthMoonBary, t);
        (planet[1] - earth[1]).atan2(planet[0] - earth[0]).to_degrees()
    }
}

impl Ephemeris for MeanElementEphemeris {
    fn ecliptic_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        _geo: &GeoPoint,
    ) -> Result<f64, EphemError> {
        let t = jd_to_centuries(jd_utc);
        let lon = match body {
            Body::Moon => moon_longitude_deg(t),
            Body::Sun => {
                // The Sun sits opposite Earth's heliocentric position.
                let earth = heliocentric_position(Orbit::EarthMoonBary, t);
                (-earth[1]).atan2(-earth[0]).to_degrees()
            }
            Body::Mercury => Self::planet_longitude(Orbit::Mercury, t),
            Body::Venus => Self::planet_longitude(Orbit::Venus, t),
            Body::Mars => Self::planet_longitude(Orbit::Mars, t),
            Body::Jupiter => Self::planet_longitude(Orbit::Jupiter, t),
            Body::Saturn => Self::planet_longitude(Orbit::Saturn, t),
            Body::Uranus => Self::planet_longitude(Orbit::Uranus, t),
            Body::Neptune => Self::planet_longitude(Orbit::Neptune, t),
            Body::Pluto => Self::planet_longitude(Orbit::Pluto, t),
        };
        Ok(normalize_deg(lon))
    }

    fn supported_jd_range(&self) -> (f64, f64) {
        (MIN_JD, MAX_JD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;
    use selene_time::calendar_to_jd;

    fn greenwich() -> GeoPoint {
        GeoPoint::new(51.48, 0.0, 0.0)
    }

    #[test]
    fn sun_at_march_equinox() {
        // 2000-Mar-20 07:35 UTC: Sun crosses 0 deg Aries.
        let jd = calendar_to_jd(2000, 3, 20.0 + 7.0 / 24.0 + 35.0 / 1440.0);
        let eph = MeanElementEphemeris::new();
        let lon = checked_longitude(&eph, Body::Sun, jd, &greenwich()).unwrap();
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.2, "sun lon at equinox = {lon}");
    }

    #[test]
    fn sun_at_june_solstice() {
        // 2000-Jun-21 01:48 UTC: Sun at 90 deg (0 Cancer).
        let jd = calendar_to_jd(2000, 6, 21.0 + 1.8 / 24.0);
        let eph = MeanElementEphemeris::new();
        let lon = checked_longitude(&eph, Body::Sun, jd, &greenwich()).unwrap();
        assert!((lon - 90.0).abs() < 0.2, "sun lon at solstice = {lon}");
    }

    #[test]
    fn all_bodies_finite_and_normalized() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(2024, 8, 1.5);
        for body in ALL_BODIES {
            let lon = checked_longitude(&eph, body, jd, &greenwich()).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body}: lon = {lon}");
        }
    }

    #[test]
    fn deterministic() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(1995, 2, 11.25);
        for body in ALL_BODIES {
            let a = checked_longitude(&eph, body, jd, &greenwich()).unwrap();
            let b = checked_longitude(&eph, body, jd, &greenwich()).unwrap();
            assert!(a == b, "{body} not deterministic");
        }
    }

    #[test]
    fn rejects_out_of_range_epoch() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(1750, 1, 1.0);
        let err = checked_longitude(&eph, Body::Moon, jd, &greenwich());
        assert!(matches!(err, Err(EphemError::EpochOutOfRange { .. })));
    }

    #[test]
    fn rejects_non_finite_epoch() {
        let eph = MeanElementEphemeris::new();
        let err = checked_longitude(&eph, Body::Moon, f64::NAN, &greenwich());
        assert!(matches!(err, Err(EphemError::EpochOutOfRange { .. })));
    }

    #[test]
    fn traps_non_finite_provider_output() {
        struct BrokenEphemeris;
        impl Ephemeris for BrokenEphemeris {
            fn ecliptic_longitude(
                &self,
                _body: Body,
                _jd_utc: f64,
                _geo: &GeoPoint,
            ) -> Result<f64, EphemError> {
                Ok(f64::NAN)
            }
            fn supported_jd_range(&self) -> (f64, f64) {
                (0.0, 1e9)
            }
        }
        let err = checked_longitude(&BrokenEphemeris, Body::Mars, 2_451_545.0, &greenwich());
        assert!(matches!(
            err,
            Err(EphemError::NonFiniteLongitude { body: Body::Mars })
        ));
    }
}
