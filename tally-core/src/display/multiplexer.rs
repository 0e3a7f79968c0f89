//! Display multiplexer
//!
//! Only one digit is lit at any instant. Each firing shows the next
//! position, so at a 5 ms period each digit is refreshed every 10 ms and
//! both appear steadily lit.
//!
//! State machine:
//! ```text
//!   ┌────────────┐  fire: units @ DIG1  ┌───────────┐
//!   │ ShowUnits  │ ───────────────────▶ │ ShowTens  │
//!   │ (initial)  │ ◀─────────────────── │           │
//!   └────────────┘  fire: tens @ DIG2   └───────────┘
//! ```

use tally_hal::OutputPin;

use super::renderer::{DigitPosition, DigitRenderer};
use super::value::DisplayValue;

/// Which digit the next firing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuxPhase {
    /// Next firing shows the units digit on DIG1
    #[default]
    ShowUnits,
    /// Next firing shows the tens digit on DIG2
    ShowTens,
}

impl MuxPhase {
    /// The other phase
    pub const fn next(self) -> Self {
        match self {
            MuxPhase::ShowUnits => MuxPhase::ShowTens,
            MuxPhase::ShowTens => MuxPhase::ShowUnits,
        }
    }

    /// Position driven in this phase
    pub const fn position(self) -> DigitPosition {
        match self {
            MuxPhase::ShowUnits => DigitPosition::Units,
            MuxPhase::ShowTens => DigitPosition::Tens,
        }
    }

    /// Digit of `value` shown in this phase
    pub const fn digit_of(self, value: DisplayValue) -> u8 {
        match self {
            MuxPhase::ShowUnits => value.units(),
            MuxPhase::ShowTens => value.tens(),
        }
    }
}

/// Time-division multiplexer for the two digit positions
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    phase: MuxPhase,
}

impl Multiplexer {
    /// Create a multiplexer in the initial [`MuxPhase::ShowUnits`] phase
    pub const fn new() -> Self {
        Self {
            phase: MuxPhase::ShowUnits,
        }
    }

    /// Phase of the next firing
    pub fn phase(&self) -> MuxPhase {
        self.phase
    }

    /// Show the current phase's digit of `value` and advance the phase
    ///
    /// Returns the position that was driven.
    pub fn refresh<P: OutputPin>(
        &mut self,
        value: DisplayValue,
        renderer: &mut DigitRenderer<P>,
    ) -> DigitPosition {
        let phase = self.phase;
        let position = phase.position();
        renderer.show(phase.digit_of(value), position);
        self.phase = phase.next();
        position
    }
}
