//! Error types for the lunar return search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_ephem::EphemError;

/// Errors from the return locator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search configuration.
    InvalidConfig(&'static str),
    /// The search window was exhausted without bracketing a return.
    ///
    /// The ~27.3-day lunar period guarantees a root inside any window of
    /// 28 days or more, so this indicates a provider anomaly rather than
    /// a user error.
    NoReturnFound { window_days: f64 },
    /// Error from the ephemeris provider.
    Ephemeris(EphemError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::NoReturnFound { window_days } => {
                write!(f, "no lunar return found within {window_days} days")
            }
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemError> for SearchError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
