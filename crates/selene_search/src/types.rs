//! Types for the lunar return search.

use serde::{Deserialize, Serialize};

use selene_time::Instant;

/// Configuration for the return locator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnConfig {
    /// Coarse scan step size in days (default 0.5 — the Moon moves
    /// ~6.6 degrees per step, far from a full wrap).
    pub step_size_days: f64,
    /// Maximum forward search window in days (default 40; returns recur
    /// every ~27.3 days, so any window over one period suffices).
    pub max_window_days: f64,
    /// Fine match tolerance on the longitude delta, degrees (default 0.01).
    pub tolerance_deg: f64,
    /// Maximum bisection iterations (default 60).
    pub max_iterations: u32,
    /// Convergence threshold on the bracket width, days (default 1e-6,
    /// under a tenth of a second).
    pub convergence_days: f64,
}

impl Default for ReturnConfig {
    fn default() -> Self {
        Self {
            step_size_days: 0.5,
            max_window_days: 40.0,
            tolerance_deg: 0.01,
            max_iterations: 60,
            convergence_days: 1e-6,
        }
    }
}

impl ReturnConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.max_window_days.is_finite() || self.max_window_days < self.step_size_days {
            return Err("max_window_days must be at least one step");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

/// A located lunar return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarReturn {
    /// Return time as a UTC Julian Date.
    pub jd_utc: f64,
    /// Moon's longitude at the return, degrees [0, 360).
    pub moon_longitude_deg: f64,
    /// The natal longitude that was matched.
    pub target_longitude_deg: f64,
    /// |moon_longitude − target| through the shortest arc.
    pub deviation_deg: f64,
}

impl LunarReturn {
    /// Return time as a UTC calendar instant.
    pub fn instant(&self) -> Instant {
        Instant::from_jd(self.jd_utc)
    }
}

/// One full return-to-return cycle: the validity window of a monthly
/// forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnCycle {
    /// The return opening the cycle.
    pub start: LunarReturn,
    /// The next return, closing the cycle.
    pub end: LunarReturn,
}

impl ReturnCycle {
    /// Cycle length in days (~27.3).
    pub fn length_days(&self) -> f64 {
        self.end.jd_utc - self.start.jd_utc
    }
}

/// Phase of the locator's coarse-scan / refine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchPhase {
    /// Stepping forward, watching for a sign change of the delta.
    Scanning,
    /// A genuine sign change was bracketed; about to refine.
    Bracketed,
    /// Bisecting inside the bracket.
    Refining,
    /// Converged on a return.
    Found,
    /// Window exhausted without a bracket.
    Exhausted,
}
