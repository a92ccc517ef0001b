//! Wrap-aware angular arithmetic on ecliptic longitudes.
//!
//! Every longitude in the engine lives on the circle [0, 360). Raw
//! subtraction across the 0°/360° seam is never meaningful; all deltas go
//! through the shortest arc.

/// Normalize an angle to [0, 360) degrees. Idempotent.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed shortest-arc delta `a − b`, reduced to (−180, 180].
///
/// At the exact wrap boundary (|a − b| = 180°) the positive representative
/// is chosen, so the result is always the minimal-magnitude signed delta.
pub fn signed_delta_deg(a: f64, b: f64) -> f64 {
    let mut d = (a - b) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Unsigned shortest-arc separation between two longitudes, in [0, 180].
pub fn separation_deg(a: f64, b: f64) -> f64 {
    signed_delta_deg(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_in_range() {
        assert_abs_diff_eq!(normalize_deg(0.0), 0.0);
        assert_abs_diff_eq!(normalize_deg(359.999), 359.999, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(360.0), 0.0);
        assert_abs_diff_eq!(normalize_deg(-10.0), 350.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(730.0), 10.0, epsilon = 1e-10);
    }

    #[test]
    fn normalize_idempotent() {
        for &x in &[-720.5, -180.0, 0.0, 95.0, 359.9, 1234.5] {
            let once = normalize_deg(x);
            assert!((normalize_deg(once) - once).abs() < 1e-12, "x = {x}");
            assert!((0.0..360.0).contains(&once), "x = {x}");
        }
    }

    #[test]
    fn signed_delta_basic() {
        assert_abs_diff_eq!(signed_delta_deg(10.0, 350.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta_deg(350.0, 10.0), -20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta_deg(90.0, 0.0), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn signed_delta_boundary() {
        // Exactly opposite points: the positive representative wins.
        assert_abs_diff_eq!(signed_delta_deg(180.0, 0.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta_deg(0.0, 180.0), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn separation_symmetric() {
        let pairs = [(10.0, 190.0), (0.0, 359.0), (95.0, 95.0), (45.0, 300.0)];
        for &(a, b) in &pairs {
            let d1 = separation_deg(a, b);
            let d2 = separation_deg(b, a);
            assert!((d1 - d2).abs() < 1e-12, "a={a} b={b}");
            assert!((0.0..=180.0).contains(&d1), "a={a} b={b} d={d1}");
        }
    }

    #[test]
    fn separation_across_wrap() {
        assert!((separation_deg(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((separation_deg(10.0, 190.0) - 180.0).abs() < 1e-12);
    }
}
