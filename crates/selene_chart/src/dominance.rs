//! Elemental and modal dominance scoring.
//!
//! Aggregates sign (and house) membership of the 10 chart bodies into
//! ranked element and modality scores, plus the "synthetic" sign and
//! house — the unique sign/house whose element and modality are both
//! dominant.

use serde::{Deserialize, Serialize};

use selene_ephem::Body;

use crate::chart::ReturnChart;
use crate::zodiac::{ALL_ELEMENTS, ALL_MODALITIES, ALL_SIGNS, Element, Modality, Sign};

/// Per-body weight scheme.
///
/// Equal weighting is the default; whether some bodies should count more
/// is a configuration point, never a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Weighting {
    /// Every body counts 1.
    Equal,
    /// Traditional planet weights: luminaries 5, personal planets 3,
    /// social planets 2, outer planets 1.
    Traditional,
}

impl Default for Weighting {
    fn default() -> Self {
        Self::Equal
    }
}

impl Weighting {
    /// Weight of one body under this scheme.
    pub fn weight(self, body: Body) -> f64 {
        match self {
            Self::Equal => 1.0,
            Self::Traditional => match body {
                Body::Sun | Body::Moon => 5.0,
                Body::Mercury | Body::Venus | Body::Mars => 3.0,
                Body::Jupiter | Body::Saturn => 2.0,
                Body::Uranus | Body::Neptune | Body::Pluto => 1.0,
            },
        }
    }
}

/// Accumulated element and modality scores, indexed by canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub elements: [f64; 4],
    pub modalities: [f64; 3],
}

impl ScoreBoard {
    fn add(&mut self, element: Element, modality: Modality, weight: f64) {
        self.elements[element.index() as usize] += weight;
        self.modalities[modality.index() as usize] += weight;
    }

    /// Elements ranked descending by score; ties keep canonical order.
    pub fn ranked_elements(&self) -> [Element; 4] {
        let mut ranked = ALL_ELEMENTS;
        ranked.sort_by(|a, b| {
            self.elements[b.index() as usize].total_cmp(&self.elements[a.index() as usize])
        });
        ranked
    }

    /// Modalities ranked descending by score; ties keep canonical order.
    pub fn ranked_modalities(&self) -> [Modality; 3] {
        let mut ranked = ALL_MODALITIES;
        ranked.sort_by(|a, b| {
            self.modalities[b.index() as usize].total_cmp(&self.modalities[a.index() as usize])
        });
        ranked
    }
}

/// Ranked dominance derived from a chart's sign and house assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceResult {
    /// Scores by the signs bodies occupy.
    pub by_sign: ScoreBoard,
    /// Scores by the houses bodies occupy (houses carry the same
    /// element/modality wheel as the signs).
    pub by_house: ScoreBoard,
    /// Elements ranked descending from the sign scores.
    pub ranked_elements: [Element; 4],
    /// Modalities ranked descending from the sign scores.
    pub ranked_modalities: [Modality; 3],
    /// The sign whose element and modality are both sign-dominant.
    pub synthetic_sign: Sign,
    /// The house (1..=12) whose element and modality are both
    /// house-dominant.
    pub synthetic_house: u8,
}

impl DominanceResult {
    pub fn dominant_element(&self) -> Element {
        self.ranked_elements[0]
    }

    pub fn dominant_modality(&self) -> Modality {
        self.ranked_modalities[0]
    }
}

/// Element/modality of a house: the wheel repeats the sign pattern
/// (house 1 = Fire/Cardinal like Aries, house 2 = Earth/Fixed, ...).
pub fn house_traits(house: u8) -> (Element, Modality) {
    let sign = Sign::from_index_wrapping(house as i32 - 1);
    (sign.element(), sign.modality())
}

/// The unique sign carrying a given element and modality.
pub fn synthetic_sign(element: Element, modality: Modality) -> Sign {
    // 12 signs = 4 elements x 3 modalities; each combination occurs once.
    *ALL_SIGNS
        .iter()
        .find(|s| s.element() == element && s.modality() == modality)
        .unwrap_or(&Sign::Aries)
}

/// The unique house (1..=12) carrying a given element and modality.
pub fn synthetic_house(element: Element, modality: Modality) -> u8 {
    (1..=12)
        .find(|&h| house_traits(h) == (element, modality))
        .unwrap_or(1)
}

/// Score a chart's dominance under a weighting scheme.
pub fn score_dominance(chart: &ReturnChart, weighting: Weighting) -> DominanceResult {
    let mut by_sign = ScoreBoard::default();
    let mut by_house = ScoreBoard::default();

    for cb in &chart.bodies {
        let w = weighting.weight(cb.body);
        by_sign.add(cb.sign.element(), cb.sign.modality(), w);
        let (el, md) = house_traits(cb.house);
        by_house.add(el, md, w);
    }

    let ranked_elements = by_sign.ranked_elements();
    let ranked_modalities = by_sign.ranked_modalities();
    let synthetic = synthetic_sign(ranked_elements[0], ranked_modalities[0]);
    let house_el = by_house.ranked_elements()[0];
    let house_md = by_house.ranked_modalities()[0];

    DominanceResult {
        by_sign,
        by_house,
        ranked_elements,
        ranked_modalities,
        synthetic_sign: synthetic,
        synthetic_house: synthetic_house(house_el, house_md),
    }
}
