//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Needed for the ascendant/midheaven computation: the ecliptic degree
//! rising at a location is a function of the local sidereal time there.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.
//! Public domain formula.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time at a given UTC Julian Date.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − J2000)
///        + 0.000387933·T² − T³/38710000
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_utc: f64) -> f64 {
    let t = jd_to_centuries(jd_utc);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd_utc - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude.
///
/// LST = GMST + longitude_east. Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}
