//! Pairwise aspect detection.
//!
//! Classifies the wrap-aware angular separation of every unordered body
//! pair against a fixed table of 6 aspect kinds, each with its own orb.

use serde::{Deserialize, Serialize};

use selene_ephem::{Body, separation_deg};

use crate::chart::ReturnChart;

/// The 6 recognized aspect kinds.
///
/// Declaration order is the tie-break order: when a separation falls at
/// the exact same distance from two targets, the earlier kind wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

/// All aspect kinds in tie-break order.
pub const ALL_ASPECT_KINDS: [AspectKind; 6] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
    AspectKind::Quincunx,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
            Self::Quincunx => "Quincunx",
        }
    }

    /// Exact target angle in degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
        }
    }

    /// Allowed orb around the target angle, in degrees.
    ///
    /// Tightest for the minor quincunx, widest for conjunction and
    /// opposition. Fixed configuration, not derived.
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction => 8.0,
            Self::Opposition => 8.0,
            Self::Trine => 7.0,
            Self::Square => 7.0,
            Self::Sextile => 5.0,
            Self::Quincunx => 3.0,
        }
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One detected aspect between an unordered pair of bodies.
///
/// `body_a` always carries the smaller canonical body index, so
/// (A, B) and (B, A) produce the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Wrap-aware angular separation, degrees in [0, 180].
    pub separation_deg: f64,
    /// Absolute deviation from the kind's exact target angle.
    pub deviation_deg: f64,
}

/// Classify a separation against the aspect table.
///
/// Returns the matching kind, or `None` if the separation is outside
/// every orb. With overlapping orbs the closest target wins; an exact
/// tie goes to the earlier table entry.
pub fn classify_separation(sep_deg: f64) -> Option<AspectKind> {
    let mut best: Option<(AspectKind, f64)> = None;
    for kind in ALL_ASPECT_KINDS {
        let deviation = (sep_deg - kind.target_deg()).abs();
        if deviation <= kind.orb_deg() {
            match best {
                Some((_, best_dev)) if deviation >= best_dev => {}
                _ => best = Some((kind, deviation)),
            }
        }
    }
    best.map(|(kind, _)| kind)
}

/// Detect all aspects between bodies of a chart.
///
/// Pure function of the chart's longitudes; yields at most one aspect
/// per unordered pair.
pub fn detect_aspects(chart: &ReturnChart) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..chart.bodies.len() {
        for j in (i + 1)..chart.bodies.len() {
            let a = &chart.bodies[i];
            let b = &chart.bodies[j];
            let sep = separation_deg(a.longitude_deg, b.longitude_deg);
            if let Some(kind) = classify_separation(sep) {
                aspects.push(Aspect {
                    body_a: a.body,
                    body_b: b.body,
                    kind,
                    separation_deg: sep,
                    deviation_deg: (sep - kind.target_deg()).abs(),
                });
            }
        }
    }
    aspects
}
