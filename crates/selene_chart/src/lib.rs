//! Chart computation: natal snapshots, return charts, aspects, dominance.
//!
//! This crate provides:
//! - Zodiac sign / element / modality tables
//! - Ascendant and midheaven from local sidereal time
//! - The natal snapshot builder (birth reference chart)
//! - The return-chart assembler (signs, whole-sign houses, retrograde)
//! - Pairwise aspect detection with per-kind orbs
//! - Elemental/modal dominance scoring

pub mod angles;
pub mod aspect;
pub mod chart;
pub mod dominance;
pub mod error;
pub mod natal;
pub mod zodiac;

pub use angles::{OBLIQUITY_J2000_RAD, ascendant_deg, chart_angles_deg, midheaven_deg};
pub use aspect::{ALL_ASPECT_KINDS, Aspect, AspectKind, classify_separation, detect_aspects};
pub use chart::{ChartBody, ReturnChart, assemble_chart, is_retrograde, whole_sign_house};
pub use dominance::{
    DominanceResult, ScoreBoard, Weighting, house_traits, score_dominance, synthetic_house,
    synthetic_sign,
};
pub use error::ChartError;
pub use natal::{BodyPosition, NatalSnapshot, natal_moon_longitude, natal_snapshot};
pub use zodiac::{ALL_ELEMENTS, ALL_MODALITIES, ALL_SIGNS, Element, Modality, Sign};
