//! Lunar return locator.
//!
//! Finds the instant the Moon's ecliptic longitude returns to a natal
//! target longitude. Coarse forward scan on the signed wrap-aware delta
//! f(t) = delta(moon_lon(t), target) in (-180, 180], then bisection
//! inside the bracketed sign change. Zero-crossings of f correspond to
//! returns; the wrap at 0°/360° never produces a spurious bracket
//! because deltas are always reduced to the shortest arc and wrap jumps
//! are rejected by magnitude.

use selene_ephem::{Body, Ephemeris, GeoPoint, checked_longitude, signed_delta_deg};

use crate::error::SearchError;
use crate::types::{LunarReturn, ReturnConfig, ReturnCycle, SearchPhase};

/// Gap between a found return and the restart point when searching for
/// the cycle-closing return, in days. Short enough to never skip a
/// ~27.3-day period, long enough to leave the current root behind.
const NEXT_RETURN_GAP_DAYS: f64 = 25.0;

/// Signed wrap-aware delta between the Moon's longitude and the target.
fn delta_at<E: Ephemeris>(
    eph: &E,
    target_deg: f64,
    jd_utc: f64,
    geo: &GeoPoint,
) -> Result<f64, SearchError> {
    let lon = checked_longitude(eph, Body::Moon, jd_utc, geo)?;
    Ok(signed_delta_deg(lon, target_deg))
}

/// A sign change is a genuine crossing only if it is not the wrap jump
/// from ~+180 to ~-180 (or back).
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b <= 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first lunar return at or after `jd_start`.
///
/// Deterministic: identical inputs always locate the same instant. Fails
/// with [`SearchError::NoReturnFound`] if the window is exhausted without
/// a bracketed crossing, which the ~27.3-day period makes impossible for
/// a well-behaved provider and a window over one period.
pub fn find_return<E: Ephemeris>(
    eph: &E,
    natal_moon_deg: f64,
    jd_start: f64,
    geo: &GeoPoint,
    config: &ReturnConfig,
) -> Result<LunarReturn, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    geo.validate().map_err(SearchError::InvalidConfig)?;

    let jd_limit = jd_start + config.max_window_days;

    let mut phase = SearchPhase::Scanning;
    let mut t_prev = jd_start;
    let mut f_prev = delta_at(eph, natal_moon_deg, jd_start, geo)?;
    // Bracket endpoints once a crossing is found.
    let (mut t_a, mut f_a, mut t_b) = (jd_start, f_prev, jd_start);
    let mut iterations = 0u32;
    let mut found_t = jd_start;

    loop {
        match phase {
            SearchPhase::Scanning => {
                if f_prev.abs() <= config.tolerance_deg {
                    // Already sitting on a return.
                    found_t = t_prev;
                    phase = SearchPhase::Found;
                    continue;
                }
                let t_curr = t_prev + config.step_size_days;
                if t_curr > jd_limit {
                    phase = SearchPhase::Exhausted;
                    continue;
                }
                let f_curr = delta_at(eph, natal_moon_deg, t_curr, geo)?;
                if is_genuine_crossing(f_prev, f_curr) {
                    t_a = t_prev;
                    f_a = f_prev;
                    t_b = t_curr;
                    phase = SearchPhase::Bracketed;
                } else {
                    t_prev = t_curr;
                    f_prev = f_curr;
                }
            }
            SearchPhase::Bracketed => {
                phase = SearchPhase::Refining;
            }
            SearchPhase::Refining => {
                let t_mid = 0.5 * (t_a + t_b);
                let f_mid = delta_at(eph, natal_moon_deg, t_mid, geo)?;
                iterations += 1;

                if f_mid.abs() <= config.tolerance_deg
                    || (t_b - t_a).abs() < config.convergence_days
                    || iterations >= config.max_iterations
                {
                    found_t = t_mid;
                    phase = SearchPhase::Found;
                    continue;
                }
                if is_genuine_crossing(f_a, f_mid) {
                    t_b = t_mid;
                } else {
                    t_a = t_mid;
                    f_a = f_mid;
                }
            }
            SearchPhase::Found => {
                let moon_longitude_deg = checked_longitude(eph, Body::Moon, found_t, geo)?;
                return Ok(LunarReturn {
                    jd_utc: found_t,
                    moon_longitude_deg,
                    target_longitude_deg: natal_moon_deg,
                    deviation_deg: signed_delta_deg(moon_longitude_deg, natal_moon_deg).abs(),
                });
            }
            SearchPhase::Exhausted => {
                return Err(SearchError::NoReturnFound {
                    window_days: config.max_window_days,
                });
            }
        }
    }
}

/// Find the full cycle: the first return at or after `jd_start` and the
/// next one closing it.
///
/// The second search restarts [`NEXT_RETURN_GAP_DAYS`] after the first
/// root so the locator brackets the following period's crossing.
pub fn find_cycle<E: Ephemeris>(
    eph: &E,
    natal_moon_deg: f64,
    jd_start: f64,
    geo: &GeoPoint,
    config: &ReturnConfig,
) -> Result<ReturnCycle, SearchError> {
    let start = find_return(eph, natal_moon_deg, jd_start, geo, config)?;
    let end = find_return(
        eph,
        natal_moon_deg,
        start.jd_utc + NEXT_RETURN_GAP_DAYS,
        geo,
        config,
    )?;
    Ok(ReturnCycle { start, end })
}
