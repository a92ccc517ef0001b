//! UTC instants, Julian Date conversions, and sidereal time.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - An [`Instant`] type for UTC points in time with sub-minute precision
//! - Greenwich Mean Sidereal Time and Local Sidereal Time

pub mod instant;
pub mod julian;
pub mod sidereal;

pub use instant::Instant;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
