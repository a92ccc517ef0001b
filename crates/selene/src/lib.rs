//! Convenience wrapper for the selene lunar return engine.
//!
//! Re-exports the full public surface of the layered crates and adds a
//! one-call forecast pipeline, so most callers only need `use selene::*`.
//!
//! # Quick start
//!
//! ```rust
//! use selene::*;
//!
//! let eph = MeanElementEphemeris::default();
//! let birth = Instant::new(1990, 6, 15, 8, 30, 0.0);
//! let birthplace = GeoPoint::new(40.7128, -74.0060, -5.0);
//! let start = Instant::new(2024, 3, 1, 0, 0, 0.0);
//!
//! let forecast = monthly_forecast(
//!     &eph,
//!     birth,
//!     birthplace,
//!     start,
//!     birthplace,
//!     &ReturnConfig::default(),
//!     Weighting::default(),
//! )
//! .expect("forecast");
//! println!("return at JD {:.5}", forecast.cycle.start.jd_utc);
//! ```

pub mod error;
pub mod forecast;

pub use error::SeleneError;
pub use forecast::{Forecast, chart_at, monthly_forecast};

// Re-export the layered crates' surfaces so callers don't need to
// depend on them directly.
pub use selene_time::{Instant, calendar_to_jd, jd_to_calendar};
pub use selene_ephem::{
    ALL_BODIES, Body, EphemError, Ephemeris, GeoPoint, MeanElementEphemeris, normalize_deg,
    separation_deg, signed_delta_deg,
};
pub use selene_chart::{
    ALL_ASPECT_KINDS, ALL_ELEMENTS, ALL_MODALITIES, ALL_SIGNS, Aspect, AspectKind, BodyPosition,
    ChartBody, ChartError, DominanceResult, Element, Modality, NatalSnapshot, ReturnChart,
    ScoreBoard, Sign, Weighting, assemble_chart, detect_aspects, natal_moon_longitude,
    natal_snapshot, score_dominance,
};
pub use selene_search::{
    LunarReturn, ReturnConfig, ReturnCycle, SearchError, find_cycle, find_return,
};
