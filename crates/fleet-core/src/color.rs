//! Entity color — the visual charge-state signal, not a physical property.

use std::fmt;

/// Named display color of an entity.
///
/// Color encodes battery pressure for the renderer: green means plenty of
/// charge, yellow means caution, red means a low-battery diversion is in
/// progress.  Red is only meaningful while the entity is delivering; an
/// idle entity has no deadline pressure and never shows red.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Yellow,
    Red,
}

/// Charge above which an entity displays green.
pub const GREEN_ABOVE: f64 = 70.0;

/// Charge above which an entity displays yellow (red or yellow at or below).
pub const YELLOW_ABOVE: f64 = 35.0;

impl Color {
    /// Map a charge level to a display color.
    ///
    /// `delivering` selects red for charge ≤ 35; an idle entity stays
    /// yellow at the same level.
    pub fn from_charge(charge: f64, delivering: bool) -> Color {
        if charge > GREEN_ABOVE {
            Color::Green
        } else if charge > YELLOW_ABOVE || !delivering {
            Color::Yellow
        } else {
            Color::Red
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
        };
        f.write_str(s)
    }
}
