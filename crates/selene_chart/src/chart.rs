//! Return chart assembly: positions, signs, houses, angles.

use serde::{Deserialize, Serialize};

use selene_ephem::{
    ALL_BODIES, Body, Ephemeris, GeoPoint, checked_longitude, signed_delta_deg,
};
use selene_time::Instant;

use crate::angles::chart_angles_deg;
use crate::error::ChartError;
use crate::natal::BodyPosition;
use crate::zodiac::Sign;

/// A body placed in a chart: longitude, sign, house, motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBody {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    pub sign: Sign,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    pub retrograde: bool,
}

/// A fully assembled chart at the located return instant.
///
/// Houses use the Whole-Sign system anchored at the *current* location's
/// ascendant: house 1 is the ascendant's sign, each following house the
/// next sign in zodiacal order. Immutable result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnChart {
    pub instant: Instant,
    pub jd_utc: f64,
    pub place: GeoPoint,
    /// All 10 bodies in canonical chart order.
    pub bodies: [ChartBody; 10],
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    pub ascendant_sign: Sign,
    pub midheaven_sign: Sign,
}

impl ReturnChart {
    /// Placement of a specific body.
    pub fn body(&self, body: Body) -> &ChartBody {
        &self.bodies[body.index() as usize]
    }
}

/// Whole-sign house of a body's sign for a given ascendant sign.
///
/// House 1 is the ascendant's sign; houses advance with the signs,
/// wrapping after 12. No partial-degree cusps — boundaries coincide
/// exactly with sign boundaries.
pub fn whole_sign_house(body_sign: Sign, asc_sign: Sign) -> u8 {
    let offset = body_sign.index() as i32 - asc_sign.index() as i32;
    (offset.rem_euclid(12) + 1) as u8
}

/// Whether a body shows apparent backward motion at `jd_utc`.
///
/// Retrograde iff the wrap-aware longitude delta over a 24 hour window
/// is negative. The window probes forward; on the last supported day of
/// the provider's range it probes backward instead, so any in-range
/// instant can be classified. Deterministic for identical inputs.
pub fn is_retrograde<E: Ephemeris>(
    eph: &E,
    body: Body,
    jd_utc: f64,
    geo: &GeoPoint,
) -> Result<bool, ChartError> {
    let (_, max_jd) = eph.supported_jd_range();
    let (start, end) = if jd_utc + 1.0 <= max_jd {
        (jd_utc, jd_utc + 1.0)
    } else {
        (jd_utc - 1.0, jd_utc)
    };
    let before = checked_longitude(eph, body, start, geo)?;
    let after = checked_longitude(eph, body, end, geo)?;
    Ok(signed_delta_deg(after, before) < 0.0)
}

/// Query one body's longitude and motion state.
pub fn body_position<E: Ephemeris>(
    eph: &E,
    body: Body,
    jd_utc: f64,
    geo: &GeoPoint,
) -> Result<BodyPosition, ChartError> {
    let longitude_deg = checked_longitude(eph, body, jd_utc, geo)?;
    let retrograde = is_retrograde(eph, body, jd_utc, geo)?;
    Ok(BodyPosition {
        body,
        longitude_deg,
        retrograde,
    })
}

/// Assemble the full chart at a (return) instant and the current location.
pub fn assemble_chart<E: Ephemeris>(
    eph: &E,
    jd_utc: f64,
    place: GeoPoint,
) -> Result<ReturnChart, ChartError> {
    place.validate().map_err(ChartError::InvalidInput)?;

    let (ascendant_deg, midheaven_deg) = chart_angles_deg(jd_utc, &place);
    let ascendant_sign = Sign::from_longitude(ascendant_deg);
    let midheaven_sign = Sign::from_longitude(midheaven_deg);

    let mut bodies = [ChartBody {
        body: Body::Sun,
        longitude_deg: 0.0,
        sign: Sign::Aries,
        house: 1,
        retrograde: false,
    }; 10];
    for body in ALL_BODIES {
        let pos = body_position(eph, body, jd_utc, &place)?;
        let sign = Sign::from_longitude(pos.longitude_deg);
        bodies[body.index() as usize] = ChartBody {
            body,
            longitude_deg: pos.longitude_deg,
            sign,
            house: whole_sign_house(sign, ascendant_sign),
            retrograde: pos.retrograde,
        };
    }

    Ok(ReturnChart {
        instant: Instant::from_jd(jd_utc),
        jd_utc,
        place,
        bodies,
        ascendant_deg,
        midheaven_deg,
        ascendant_sign,
        midheaven_sign,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_ephem::MeanElementEphemeris;
    use selene_time::calendar_to_jd;

    fn place() -> GeoPoint {
        GeoPoint::new(48.85, 2.35, 1.0)
    }

    #[test]
    fn house_of_ascendant_sign_is_one() {
        for sign in crate::zodiac::ALL_SIGNS {
            assert_eq!(whole_sign_house(sign, sign), 1);
        }
    }

    #[test]
    fn houses_cycle_without_gaps() {
        let asc = Sign::Leo;
        let mut seen = [false; 12];
        for sign in crate::zodiac::ALL_SIGNS {
            let h = whole_sign_house(sign, asc);
            assert!((1..=12).contains(&h));
            seen[(h - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every house occupied exactly once");
    }

    #[test]
    fn worked_example_aries_ascendant() {
        // Ascendant in Aries, body at 100 deg (Cancer): house 4.
        let body_sign = Sign::from_longitude(100.0);
        assert_eq!(body_sign, Sign::Cancer);
        assert_eq!(whole_sign_house(body_sign, Sign::Aries), 4);
    }

    #[test]
    fn assembled_chart_is_consistent() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(2024, 8, 1.5);
        let chart = assemble_chart(&eph, jd, place()).unwrap();

        assert_eq!(chart.ascendant_sign, Sign::from_longitude(chart.ascendant_deg));
        assert_eq!(chart.midheaven_sign, Sign::from_longitude(chart.midheaven_deg));
        for cb in &chart.bodies {
            assert_eq!(cb.sign, Sign::from_longitude(cb.longitude_deg));
            assert_eq!(cb.house, whole_sign_house(cb.sign, chart.ascendant_sign));
        }
    }

    #[test]
    fn retrograde_deterministic() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(2024, 8, 1.5);
        for body in ALL_BODIES {
            let a = is_retrograde(&eph, body, jd, &place()).unwrap();
            let b = is_retrograde(&eph, body, jd, &place()).unwrap();
            assert_eq!(a, b, "{body}");
        }
    }

    #[test]
    fn chart_on_the_last_supported_day_works() {
        // A forward motion probe would step past the provider's range
        // here; the backward window keeps the whole range chartable.
        let eph = MeanElementEphemeris::new();
        let (min_jd, max_jd) = eph.supported_jd_range();
        let chart = assemble_chart(&eph, max_jd - 0.25, place()).unwrap();
        assert!(chart.bodies.iter().all(|cb| cb.longitude_deg.is_finite()));
        // The first supported day still probes forward.
        assert!(is_retrograde(&eph, Body::Mars, min_jd + 0.25, &place()).is_ok());
    }

    #[test]
    fn sun_and_moon_always_direct() {
        let eph = MeanElementEphemeris::new();
        for i in 0..12 {
            let jd = calendar_to_jd(2023, 1, 1.0) + 30.0 * i as f64;
            assert!(!is_retrograde(&eph, Body::Sun, jd, &place()).unwrap());
            assert!(!is_retrograde(&eph, Body::Moon, jd, &place()).unwrap());
        }
    }

    #[test]
    fn outer_planets_retrograde_part_of_the_year() {
        // Saturn spends ~4.5 months a year retrograde; across a full year
        // of monthly samples both states must appear.
        let eph = MeanElementEphemeris::new();
        let mut retro = 0;
        let mut direct = 0;
        for i in 0..12 {
            let jd = calendar_to_jd(2024, 1, 15.0) + 30.44 * i as f64;
            if is_retrograde(&eph, Body::Saturn, jd, &place()).unwrap() {
                retro += 1;
            } else {
                direct += 1;
            }
        }
        assert!(retro >= 2, "saturn retro months = {retro}");
        assert!(direct >= 2, "saturn direct months = {direct}");
    }

    #[test]
    fn chart_rejects_bad_place() {
        let eph = MeanElementEphemeris::new();
        let jd = calendar_to_jd(2024, 8, 1.5);
        let err = assemble_chart(&eph, jd, GeoPoint::new(0.0, 999.0, 0.0));
        assert!(matches!(err, Err(ChartError::InvalidInput(_))));
    }
}
