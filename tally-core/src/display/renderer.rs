//! Digit renderer
//!
//! Puts one decimal digit on one position of the display. Both digit
//! positions share the segment lines, so a position must only be selected
//! once its segments are correct: the renderer always de-selects both
//! positions, writes the segments, then selects the requested position.
//! Doing it in any other order flashes the previous digit's pattern on the
//! new position.

use tally_hal::OutputPin;

use super::segments::Segments;

/// Physical digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    /// Right-hand digit, DIG1
    Units = 1,
    /// Left-hand digit, DIG2
    Tens = 2,
}

impl DigitPosition {
    /// Map a 1-based position number; anything but 1 or 2 is no position
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(DigitPosition::Units),
            2 => Some(DigitPosition::Tens),
            _ => None,
        }
    }

    /// 1-based position number
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Drives the segment, decimal point and digit-select lines
pub struct DigitRenderer<P> {
    segments: [P; 7],
    decimal_point: P,
    units_select: P,
    tens_select: P,
}

impl<P: OutputPin> DigitRenderer<P> {
    /// Create a renderer; the display starts blank
    ///
    /// # Arguments
    /// - `segments`: segment lines in A..G order
    /// - `decimal_point`: DP line, held low for the renderer's lifetime
    /// - `units_select`, `tens_select`: DIG1 and DIG2
    pub fn new(segments: [P; 7], decimal_point: P, units_select: P, tens_select: P) -> Self {
        let mut renderer = Self {
            segments,
            decimal_point,
            units_select,
            tens_select,
        };
        renderer.clear();
        renderer
    }

    /// Show `digit` (taken modulo 10) on `position`
    pub fn show(&mut self, digit: u8, position: DigitPosition) {
        self.render(digit, position.index());
    }

    /// Show `digit` on the 1-based `position`
    ///
    /// An unknown position still writes the segments but selects neither
    /// digit, so nothing is lit.
    pub fn render(&mut self, digit: u8, position: u8) {
        self.deselect();
        self.write_segments(Segments::for_digit(digit));

        match DigitPosition::from_index(position) {
            Some(DigitPosition::Units) => self.units_select.set_high(),
            Some(DigitPosition::Tens) => self.tens_select.set_high(),
            None => {}
        }
    }

    /// Turn off every segment, the decimal point and both digit selects
    pub fn clear(&mut self) {
        self.deselect();
        self.write_segments(Segments::empty());
    }

    /// Currently selected position, read back from the select latches
    pub fn selected(&self) -> Option<DigitPosition> {
        match (self.units_select.is_set_high(), self.tens_select.is_set_high()) {
            (true, false) => Some(DigitPosition::Units),
            (false, true) => Some(DigitPosition::Tens),
            _ => None,
        }
    }

    /// Segment pattern currently on the lines
    pub fn lit(&self) -> Segments {
        let bits = Segments::ORDER
            .iter()
            .zip(self.segments.iter())
            .filter(|(_, pin)| pin.is_set_high())
            .fold(0, |bits, (seg, _)| bits | seg);
        Segments::from_bits(bits)
    }

    fn deselect(&mut self) {
        self.units_select.set_low();
        self.tens_select.set_low();
    }

    fn write_segments(&mut self, pattern: Segments) {
        for (pin, on) in self.segments.iter_mut().zip(pattern.levels()) {
            pin.set_state(on);
        }
        self.decimal_point.set_low();
    }
}
