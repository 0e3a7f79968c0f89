//! GPIO adapters for STM32F0
//!
//! [`GpioOutput`] and [`GpioInput`] implement the `tally-hal` traits for
//! any `embedded-hal` 1.0 pin. The line constructors at the bottom fix the
//! electrical mode of each kind of line on the counter board.

use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::Peri;
use embedded_hal::digital::{InputPin as HalInputPin, StatefulOutputPin};

/// Output pin adapter
///
/// Keeps a copy of the output latch so `is_set_high` can take `&self`.
/// Pin errors are dropped; on-chip GPIO is infallible.
pub struct GpioOutput<P> {
    pin: P,
    high: bool,
}

impl<P: StatefulOutputPin> GpioOutput<P> {
    /// Wrap a pin, reading its current latch
    pub fn new(mut pin: P) -> Self {
        let high = pin.is_set_high().unwrap_or(false);
        Self { pin, high }
    }

    /// Unwrap the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> tally_hal::OutputPin for GpioOutput<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
        self.high = false;
    }

    fn toggle(&mut self) {
        self.pin.toggle().ok();
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin adapter
pub struct GpioInput<P> {
    pin: P,
}

impl<P: HalInputPin> GpioInput<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: HalInputPin> tally_hal::InputPin for GpioInput<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

/// Output line of the board
pub type OutputLine = GpioOutput<Output<'static>>;

/// Input line of the board
pub type InputLine = GpioInput<Input<'static>>;

/// Segment or digit-select line: push-pull, high speed, starts low
pub fn display_line(pin: Peri<'static, impl Pin>) -> OutputLine {
    GpioOutput::new(Output::new(pin, Level::Low, Speed::VeryHigh))
}

/// Indicator LED line: push-pull, low speed, starts low
pub fn indicator_line(pin: Peri<'static, impl Pin>) -> OutputLine {
    GpioOutput::new(Output::new(pin, Level::Low, Speed::Low))
}

/// Button line: input with pull-down, pressed reads high
pub fn button_line(pin: Peri<'static, impl Pin>) -> InputLine {
    GpioInput::new(Input::new(pin, Pull::Down))
}
