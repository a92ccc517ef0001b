//! Ephemeris provider seam and built-in analytic provider.
//!
//! This crate provides:
//! - The fixed set of 10 chart [`Body`] values (Sun through Pluto)
//! - [`GeoPoint`]: geographic coordinates plus the UTC offset valid at an
//!   instant
//! - Wrap-aware angular arithmetic shared by the chart and search crates
//! - The [`Ephemeris`] trait — the seam every position query goes through
//! - [`MeanElementEphemeris`]: geocentric ecliptic longitudes from JPL
//!   approximate mean orbital elements (valid 1800–2050) and a truncated
//!   lunar series, with no data files and no I/O

pub mod angle;
pub mod body;
pub mod error;
pub mod geo;
mod kepler;
mod moon;
pub mod provider;

pub use angle::{normalize_deg, separation_deg, signed_delta_deg};
pub use body::{ALL_BODIES, Body};
pub use error::EphemError;
pub use geo::GeoPoint;
pub use provider::{Ephemeris, MeanElementEphemeris, checked_longitude};
