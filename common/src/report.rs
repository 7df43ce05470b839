//! Four-way report codes for the button pair.

use crate::types::PinLevel;

/// Combined state of the two report buttons at the moment one of them
/// changed level.
///
/// Exactly one code describes any pair of levels, and each code owns one
/// event bit so the consumer can tell which state it observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairReport {
    BothReleased,
    SecondPressed,
    FirstPressed,
    BothPressed,
}

impl PairReport {
    /// Every report bit, for the consumer's poll mask.
    pub const MASK: u32 = 0b1111;

    pub fn from_levels(first: PinLevel, second: PinLevel) -> Self {
        match (first, second) {
            (PinLevel::Low, PinLevel::Low) => PairReport::BothReleased,
            (PinLevel::Low, PinLevel::High) => PairReport::SecondPressed,
            (PinLevel::High, PinLevel::Low) => PairReport::FirstPressed,
            (PinLevel::High, PinLevel::High) => PairReport::BothPressed,
        }
    }

    /// The event bit this code is raised on.
    pub fn bit(self) -> u32 {
        match self {
            PairReport::BothReleased => 1 << 0,
            PairReport::SecondPressed => 1 << 1,
            PairReport::FirstPressed => 1 << 2,
            PairReport::BothPressed => 1 << 3,
        }
    }

    /// Decode the bits one poll observed.
    ///
    /// A multi-bit value means both samplers reported within one consumer
    /// period; the pair state it describes is ambiguous and no report is
    /// produced for that period.
    pub fn from_flags(bits: u32) -> Option<Self> {
        match bits {
            b if b == PairReport::BothReleased.bit() => Some(PairReport::BothReleased),
            b if b == PairReport::SecondPressed.bit() => Some(PairReport::SecondPressed),
            b if b == PairReport::FirstPressed.bit() => Some(PairReport::FirstPressed),
            b if b == PairReport::BothPressed.bit() => Some(PairReport::BothPressed),
            _ => None,
        }
    }

    /// Console text for this report.
    pub fn message(self) -> &'static str {
        match self {
            PairReport::BothReleased => "Button 1 is Released\nButton 2 is Released",
            PairReport::SecondPressed => "Button 1 is Released\nButton 2 is Pressed",
            PairReport::FirstPressed => "Button 1 is Pressed\nButton 2 is Released",
            PairReport::BothPressed => "Button 1 is Pressed\nButton 2 is Pressed",
        }
    }
}
