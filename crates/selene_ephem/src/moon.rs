//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated trigonometric series from Meeus, "Astronomical Algorithms"
//! (2nd ed), Chapter 47 — the dominant longitude terms of the ELP-2000/82
//! solution. Accuracy of this truncation is a few hundredths of a degree,
//! comfortably inside the engine's aspect orbs and return tolerance.

/// Fundamental lunar/solar arguments at `t` Julian centuries from J2000.
/// All in degrees.
struct Fundamentals {
    /// Moon's mean longitude L'.
    lp: f64,
    /// Mean elongation of the Moon D.
    d: f64,
    /// Sun's mean anomaly M.
    m: f64,
    /// Moon's mean anomaly M'.
    mp: f64,
    /// Moon's argument of latitude F.
    f: f64,
}

fn fundamentals(t: f64) -> Fundamentals {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    Fundamentals {
        lp: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        mp: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Longitude series terms: (coeff_deg, d_mult, m_mult, mp_mult, f_mult).
const LON_TERMS: [(f64, f64, f64, f64, f64); 17] = [
    (6.288_774, 0.0, 0.0, 1.0, 0.0),
    (1.274_027, 2.0, 0.0, -1.0, 0.0),
    (0.658_314, 2.0, 0.0, 0.0, 0.0),
    (0.213_618, 0.0, 0.0, 2.0, 0.0),
    (-0.185_116, 0.0, 1.0, 0.0, 0.0),
    (-0.114_332, 0.0, 0.0, 0.0, 2.0),
    (0.058_793, 2.0, 0.0, -2.0, 0.0),
    (0.057_066, 2.0, -1.0, -1.0, 0.0),
    (0.053_322, 2.0, 0.0, 1.0, 0.0),
    (0.045_758, 2.0, -1.0, 0.0, 0.0),
    (-0.040_923, 0.0, 1.0, -1.0, 0.0),
    (-0.034_720, 1.0, 0.0, 0.0, 0.0),
    (-0.030_383, 0.0, 1.0, 1.0, 0.0),
    (0.015_327, 2.0, 0.0, 0.0, -2.0),
    (-0.012_528, 0.0, 0.0, 1.0, 2.0),
    (0.010_980, 0.0, 0.0, 1.0, -2.0),
    (0.010_675, 4.0, 0.0, -1.0, 0.0),
];

/// Geocentric ecliptic longitude of the Moon at `t` Julian centuries
/// from J2000, in degrees (not yet normalized).
pub(crate) fn moon_longitude_deg(t: f64) -> f64 {
    let fu = fundamentals(t);
    let mut lon = fu.lp;
    for &(coeff, kd, km, kmp, kf) in &LON_TERMS {
        let arg = kd * fu.d + km * fu.m + kmp * fu.mp + kf * fu.f;
        lon += coeff * arg.to_radians().sin();
    }
    lon
}
