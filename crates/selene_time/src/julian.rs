//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Implements the standard algorithms from Meeus, "Astronomical Algorithms"
//! (2nd ed), Chapter 7. Valid for all Gregorian dates; the proleptic Julian
//! calendar branch is intentionally omitted since the engine's supported
//! range starts in 1800.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` is a fractional day (e.g. 15.5 = the 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date to a Gregorian calendar date.
///
/// Returns `(year, month, fractional_day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries from J2000.0 for a given Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j2000_epoch() {
        // 2000-Jan-01 12:00 = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert_abs_diff_eq!(jd, J2000_JD, epsilon = 1e-9);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert_abs_diff_eq!(jd, 2_436_116.31, epsilon = 1e-6);
    }

    #[test]
    fn round_trip() {
        let jd = calendar_to_jd(2024, 3, 20.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 2024);
        assert_eq!(m, 3);
        assert_abs_diff_eq!(d, 20.25, epsilon = 1e-9);
    }

    #[test]
    fn round_trip_year_boundary() {
        let jd = calendar_to_jd(1999, 12, 31.999);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 1999);
        assert_eq!(m, 12);
        assert!((d - 31.999).abs() < 1e-8, "d = {d}");
    }

    #[test]
    fn centuries_at_j2000() {
        assert!(jd_to_centuries(J2000_JD).abs() < 1e-15);
    }

    #[test]
    fn centuries_one_century_later() {
        let t = jd_to_centuries(J2000_JD + DAYS_PER_CENTURY);
        assert!((t - 1.0).abs() < 1e-15);
    }
}
