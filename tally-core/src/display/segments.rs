//! 7 segment patterns
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD   (DP)
//! ```
//!
//! Bit 0 is segment A through bit 6 for segment G. Bit 7 would be the
//! decimal point, which no digit pattern ever sets.

/// Common-cathode patterns for digits 0-9 (bit order: G F E D C B A)
pub const DIGIT_PATTERNS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Set of lit segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// Segment A (top horizontal)
    pub const A: u8 = 1 << 0;
    /// Segment B (top right vertical)
    pub const B: u8 = 1 << 1;
    /// Segment C (bottom right vertical)
    pub const C: u8 = 1 << 2;
    /// Segment D (bottom horizontal)
    pub const D: u8 = 1 << 3;
    /// Segment E (bottom left vertical)
    pub const E: u8 = 1 << 4;
    /// Segment F (top left vertical)
    pub const F: u8 = 1 << 5;
    /// Segment G (middle horizontal)
    pub const G: u8 = 1 << 6;
    /// Decimal point, never part of a digit pattern
    pub const DP: u8 = 1 << 7;

    /// Drive order of the seven segment lines
    pub const ORDER: [u8; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// No segment lit
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Pattern for `digit`, taken modulo 10
    pub const fn for_digit(digit: u8) -> Self {
        Self(DIGIT_PATTERNS[(digit % 10) as usize])
    }

    /// Build from raw bits; the decimal point bit is dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & !Self::DP)
    }

    /// Raw pattern bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if contains segment
    pub const fn contains(&self, segment: u8) -> bool {
        (self.0 & segment) != 0
    }

    /// Lit state of each segment line in [`Self::ORDER`]
    pub fn levels(&self) -> [bool; 7] {
        Self::ORDER.map(|seg| self.contains(seg))
    }
}
