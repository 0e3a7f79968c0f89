//! Displayed number

/// The number shown on the display, always in 0..=99
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue(u8);

impl DisplayValue {
    /// Largest value before wrapping
    pub const MAX: u8 = 99;

    /// Zero
    pub const ZERO: Self = Self(0);

    /// Create a value, rejecting anything above 99
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Recombine a tens and a units digit
    pub const fn from_digits(tens: u8, units: u8) -> Option<Self> {
        if tens > 9 || units > 9 {
            return None;
        }
        Some(Self(tens * 10 + units))
    }

    /// Raw value
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Tens digit
    pub const fn tens(&self) -> u8 {
        self.0 / 10
    }

    /// Units digit
    pub const fn units(&self) -> u8 {
        self.0 % 10
    }

    /// Next value, wrapping 99 → 0
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Advance in place
    pub fn advance(&mut self) {
        *self = self.next();
    }
}

impl From<DisplayValue> for u8 {
    fn from(value: DisplayValue) -> Self {
        value.0
    }
}
