//! The fixed set of chart bodies.

use serde::{Deserialize, Serialize};

/// The 10 bodies every chart is computed over.
///
/// These are the classical chart planets (astrologically, Sun and Moon
/// count as planets). Earth is the observer and never appears in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in canonical chart order (Sun=0 .. Pluto=9).
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index in canonical chart order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Convert a 0-based index back into a [`Body`].
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Sun),
            1 => Some(Self::Moon),
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            7 => Some(Self::Uranus),
            8 => Some(Self::Neptune),
            9 => Some(Self::Pluto),
            _ => None,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for body in ALL_BODIES {
            assert_eq!(Body::from_index(body.index()), Some(body));
        }
    }

    #[test]
    fn canonical_order_matches_index() {
        for (i, body) in ALL_BODIES.iter().enumerate() {
            assert_eq!(body.index() as usize, i);
        }
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(Body::from_index(10), None);
    }
}
