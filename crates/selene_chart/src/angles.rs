//! Ascendant and Midheaven computation.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! degree rising on the eastern horizon (ascendant) and the degree
//! culminating on the meridian (midheaven), from local sidereal time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.

use selene_ephem::GeoPoint;
use selene_time::{gmst_deg, local_sidereal_time_deg};

/// Mean obliquity of the ecliptic at J2000, in radians.
pub const OBLIQUITY_J2000_RAD: f64 = 23.439_291_1 * std::f64::consts::PI / 180.0;

/// Ecliptic longitude of the ascendant from LST and latitude.
///
/// `Asc = atan2(cos(LST), -sin(LST)·cos(ε) - tan(φ)·sin(ε))`
///
/// The sign convention selects the eastern (rising) intersection of the
/// ecliptic and the horizon; the opposite branch is the descendant.
/// Returns degrees in [0, 360).
pub fn ascendant_deg(lst_deg: f64, latitude_rad: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_RAD;
    let asc = f64::atan2(
        lst.cos(),
        -lst.sin() * eps.cos() - latitude_rad.tan() * eps.sin(),
    );
    asc.to_degrees().rem_euclid(360.0)
}

/// Ecliptic longitude of the midheaven from LST alone (latitude-free).
///
/// `MC = atan2(sin(LST), cos(LST)·cos(ε))`
///
/// Returns degrees in [0, 360).
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_RAD;
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    mc.to_degrees().rem_euclid(360.0)
}

/// Ascendant and midheaven longitudes at a UTC Julian Date and location.
///
/// Shares the LST computation. Returns `(asc_deg, mc_deg)`.
pub fn chart_angles_deg(jd_utc: f64, geo: &GeoPoint) -> (f64, f64) {
    let lst = local_sidereal_time_deg(gmst_deg(jd_utc), geo.longitude_deg);
    (ascendant_deg(lst, geo.latitude_rad()), midheaven_deg(lst))
}
