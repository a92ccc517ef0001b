//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_ephem::EphemError;

/// Errors from natal snapshot or chart assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed input (bad coordinates, bad offset).
    InvalidInput(&'static str),
    /// Error from the ephemeris provider.
    Ephemeris(EphemError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
