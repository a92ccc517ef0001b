//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors from an ephemeris provider or its validation wrapper.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested instant is outside the provider's supported range.
    EpochOutOfRange { jd_utc: f64 },
    /// Provider returned NaN or infinity for a body's longitude.
    NonFiniteLongitude { body: Body },
    /// Provider-specific failure.
    Provider(String),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd_utc } => {
                write!(f, "epoch outside supported range: JD {jd_utc}")
            }
            Self::NonFiniteLongitude { body } => {
                write!(f, "provider returned non-finite longitude for {body}")
            }
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
        }
    }
}

impl Error for EphemError {}
