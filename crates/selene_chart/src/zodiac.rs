//! Zodiac signs, elements, and modalities.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Each sign belongs to exactly one of
//! 4 elements and one of 3 modalities.

use serde::{Deserialize, Serialize};

use selene_ephem::normalize_deg;

/// The 12 zodiac signs in fixed zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (Aries=0 .. Pisces=11).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The 4 classical elements, in canonical ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// All 4 elements in canonical order.
pub const ALL_ELEMENTS: [Element; 4] = [
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
];

/// The 3 modalities (quadruplicities), in canonical ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// All 3 modalities in canonical order.
pub const ALL_MODALITIES: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index in zodiacal order (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let idx = (normalize_deg(lon_deg) / 30.0) as usize;
        ALL_SIGNS[idx.min(11)]
    }

    /// Sign at a 0-based zodiacal index, wrapping modulo 12.
    pub const fn from_index_wrapping(idx: i32) -> Self {
        ALL_SIGNS[idx.rem_euclid(12) as usize]
    }

    /// The element this sign belongs to. Elements repeat every 4 signs.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// The modality this sign belongs to. Modalities repeat every 3 signs.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    /// 0-based canonical index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }

    /// 0-based canonical index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Cardinal => 0,
            Self::Fixed => 1,
            Self::Mutable => 2,
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
