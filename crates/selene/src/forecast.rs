//! One-call monthly forecast pipeline.
//!
//! Chains the layered crates end to end: natal snapshot, lunar return
//! cycle search, chart assembly at the return, aspect detection, and
//! dominance scoring.

use serde::{Deserialize, Serialize};

use selene_chart::{
    Aspect, DominanceResult, NatalSnapshot, ReturnChart, Weighting, assemble_chart,
    detect_aspects, natal_snapshot, score_dominance,
};
use selene_ephem::{Ephemeris, GeoPoint};
use selene_search::{ReturnConfig, ReturnCycle, find_cycle};
use selene_time::Instant;

use crate::error::SeleneError;

/// Complete result of a monthly forecast computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Positions and ascendant at birth.
    pub natal: NatalSnapshot,
    /// The lunar return opening the month and the one closing it.
    pub cycle: ReturnCycle,
    /// Full chart cast at the opening return for the current location.
    pub chart: ReturnChart,
    /// Aspects between return-chart bodies, in pair order.
    pub aspects: Vec<Aspect>,
    /// Element/modality dominance of the return chart.
    pub dominance: DominanceResult,
}

/// Compute the full monthly forecast.
///
/// `birth`/`birthplace` fix the natal Moon; `start`/`location` pick the
/// month (the first return at or after `start`) and where the chart is
/// cast. The cycle's end return bounds the forecast's validity window.
pub fn monthly_forecast<E: Ephemeris>(
    eph: &E,
    birth: Instant,
    birthplace: GeoPoint,
    start: Instant,
    location: GeoPoint,
    config: &ReturnConfig,
    weighting: Weighting,
) -> Result<Forecast, SeleneError> {
    let natal = natal_snapshot(eph, birth, birthplace)?;
    let cycle = find_cycle(eph, natal.moon_longitude_deg(), start.to_jd(), &location, config)?;
    let chart = assemble_chart(eph, cycle.start.jd_utc, location)?;
    let aspects = detect_aspects(&chart);
    let dominance = score_dominance(&chart, weighting);
    Ok(Forecast {
        natal,
        cycle,
        chart,
        aspects,
        dominance,
    })
}

/// Cast a return chart at an arbitrary instant without running the search.
///
/// Useful for inspecting the sky "right now" with the same chart
/// machinery the forecast uses.
pub fn chart_at<E: Ephemeris>(
    eph: &E,
    instant: Instant,
    location: GeoPoint,
) -> Result<ReturnChart, SeleneError> {
    Ok(assemble_chart(eph, instant.to_jd(), location)?)
}
