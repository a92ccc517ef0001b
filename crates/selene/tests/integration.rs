//! End-to-end tests for the one-call forecast pipeline.

use approx::assert_abs_diff_eq;
use selene::*;

fn test_inputs() -> (MeanElementEphemeris, Instant, GeoPoint, Instant, GeoPoint) {
    let eph = MeanElementEphemeris::default();
    let birth = Instant::new(1990, 6, 15, 8, 30, 0.0);
    let birthplace = GeoPoint::new(40.7128, -74.0060, -5.0);
    let start = Instant::new(2024, 3, 1, 0, 0, 0.0);
    let location = GeoPoint::new(51.5074, -0.1278, 0.0);
    (eph, birth, birthplace, start, location)
}

#[test]
fn forecast_chart_sits_at_the_opening_return() {
    let (eph, birth, birthplace, start, location) = test_inputs();
    let config = ReturnConfig::default();
    let forecast = monthly_forecast(
        &eph,
        birth,
        birthplace,
        start,
        location,
        &config,
        Weighting::default(),
    )
    .expect("forecast should succeed");

    assert_eq!(forecast.chart.jd_utc, forecast.cycle.start.jd_utc);
    // The chart's Moon matches the natal Moon within the search tolerance.
    let chart_moon = forecast.chart.body(Body::Moon).longitude_deg;
    let natal_moon = forecast.natal.moon_longitude_deg();
    assert!(
        separation_deg(chart_moon, natal_moon) <= config.tolerance_deg + 1e-9,
        "chart moon {chart_moon:.5} deg vs natal {natal_moon:.5} deg"
    );
}

#[test]
fn forecast_values_are_internally_consistent() {
    let (eph, birth, birthplace, start, location) = test_inputs();
    let forecast = monthly_forecast(
        &eph,
        birth,
        birthplace,
        start,
        location,
        &ReturnConfig::default(),
        Weighting::default(),
    )
    .expect("forecast should succeed");

    for cb in &forecast.chart.bodies {
        assert!(cb.longitude_deg >= 0.0 && cb.longitude_deg < 360.0);
        assert_eq!(cb.sign, Sign::from_longitude(cb.longitude_deg));
        assert!((1..=12).contains(&cb.house));
    }
    // Ascendant's body always lands in house 1 under whole-sign houses.
    let asc_sign = forecast.chart.ascendant_sign;
    for cb in &forecast.chart.bodies {
        if cb.sign == asc_sign {
            assert_eq!(cb.house, 1);
        }
    }
    // Each unordered pair appears at most once in the aspect list.
    for (i, a) in forecast.aspects.iter().enumerate() {
        assert!(a.body_a.index() < a.body_b.index());
        for b in &forecast.aspects[i + 1..] {
            assert!(!(a.body_a == b.body_a && a.body_b == b.body_b));
        }
    }
    // Equal weighting distributes exactly one point per body.
    let total: f64 = forecast.dominance.by_sign.elements.iter().sum();
    assert!((total - 10.0).abs() < 1e-9, "element scores sum to {total}");
}

#[test]
fn forecast_window_spans_a_sidereal_month() {
    let (eph, birth, birthplace, start, location) = test_inputs();
    let forecast = monthly_forecast(
        &eph,
        birth,
        birthplace,
        start,
        location,
        &ReturnConfig::default(),
        Weighting::Traditional,
    )
    .expect("forecast should succeed");

    let len = forecast.cycle.length_days();
    assert!(
        (len - 27.321_661).abs() < 0.5,
        "cycle length = {len:.3} days"
    );
    // Traditional weights total 5+5+3+3+3+2+2+1+1+1 = 26.
    let total: f64 = forecast.dominance.by_sign.elements.iter().sum();
    assert!((total - 26.0).abs() < 1e-9, "element scores sum to {total}");
}

#[test]
fn forecast_round_trips_through_json() {
    let (eph, birth, birthplace, start, location) = test_inputs();
    let forecast = monthly_forecast(
        &eph,
        birth,
        birthplace,
        start,
        location,
        &ReturnConfig::default(),
        Weighting::default(),
    )
    .expect("forecast should succeed");

    let json = serde_json::to_string(&forecast).expect("serialize");
    let back: Forecast = serde_json::from_str(&json).expect("deserialize");

    // Discrete fields survive exactly; floats can move by an ulp through
    // the decimal text form, so compare those within a tight tolerance.
    for (a, b) in back.natal.positions.iter().zip(&forecast.natal.positions) {
        assert_eq!((a.body, a.retrograde), (b.body, b.retrograde));
        assert_abs_diff_eq!(a.longitude_deg, b.longitude_deg, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(back.cycle.start.jd_utc, forecast.cycle.start.jd_utc, epsilon = 1e-9);
    assert_abs_diff_eq!(back.cycle.end.jd_utc, forecast.cycle.end.jd_utc, epsilon = 1e-9);
    assert_eq!(back.chart.ascendant_sign, forecast.chart.ascendant_sign);
    assert_eq!(back.chart.midheaven_sign, forecast.chart.midheaven_sign);
    for (a, b) in back.chart.bodies.iter().zip(&forecast.chart.bodies) {
        assert_eq!(
            (a.body, a.sign, a.house, a.retrograde),
            (b.body, b.sign, b.house, b.retrograde)
        );
        assert_abs_diff_eq!(a.longitude_deg, b.longitude_deg, epsilon = 1e-9);
    }
    assert_eq!(back.aspects.len(), forecast.aspects.len());
    for (a, b) in back.aspects.iter().zip(&forecast.aspects) {
        assert_eq!((a.body_a, a.body_b, a.kind), (b.body_a, b.body_b, b.kind));
        assert_abs_diff_eq!(a.separation_deg, b.separation_deg, epsilon = 1e-9);
        assert_abs_diff_eq!(a.deviation_deg, b.deviation_deg, epsilon = 1e-9);
    }
    assert_eq!(back.dominance.synthetic_sign, forecast.dominance.synthetic_sign);
    assert_eq!(back.dominance.synthetic_house, forecast.dominance.synthetic_house);
    for (a, b) in back
        .dominance
        .by_sign
        .elements
        .iter()
        .zip(&forecast.dominance.by_sign.elements)
    {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn invalid_birthplace_is_rejected() {
    let (eph, birth, _, start, location) = test_inputs();
    let bad = GeoPoint::new(95.0, 0.0, 0.0);
    let err = monthly_forecast(
        &eph,
        birth,
        bad,
        start,
        location,
        &ReturnConfig::default(),
        Weighting::default(),
    )
    .expect_err("latitude beyond the pole must fail");
    assert!(matches!(err, SeleneError::Chart(_)));
}

#[test]
fn out_of_range_birth_is_rejected() {
    let (eph, _, birthplace, start, location) = test_inputs();
    let birth = Instant::new(1700, 1, 1, 0, 0, 0.0);
    let err = monthly_forecast(
        &eph,
        birth,
        birthplace,
        start,
        location,
        &ReturnConfig::default(),
        Weighting::default(),
    )
    .expect_err("epoch before the element table must fail");
    assert!(matches!(
        err,
        SeleneError::Chart(ChartError::Ephemeris(EphemError::EpochOutOfRange { .. }))
    ));
}
