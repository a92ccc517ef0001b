//! Unified error for the one-call pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_chart::ChartError;
use selene_ephem::EphemError;
use selene_search::SearchError;

/// Any failure surfaced by the forecast pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SeleneError {
    /// Natal snapshot or chart assembly failed.
    Chart(ChartError),
    /// The return search failed.
    Search(SearchError),
}

impl Display for SeleneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for SeleneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<ChartError> for SeleneError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<SearchError> for SeleneError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<EphemError> for SeleneError {
    fn from(e: EphemError) -> Self {
        Self::Chart(ChartError::Ephemeris(e))
    }
}
