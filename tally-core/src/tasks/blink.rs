//! Indicator blink task
//!
//! While running, each period flips the blink phase and drives the three
//! indicator LEDs according to the configured [`BlinkDrive`]. While
//! stopped, the scheduler calls [`blink_idle`] on every iteration instead,
//! so a stop press turns the LEDs off without waiting for a period.

use tally_hal::{InputPin, Level, OutputPin};

use crate::app::App;
use crate::config::BlinkDrive;

/// Number of indicator LEDs
pub const INDICATOR_COUNT: usize = 3;

/// The indicator LED group, always driven together
pub struct Indicators<P> {
    leds: [P; INDICATOR_COUNT],
}

impl<P: OutputPin> Indicators<P> {
    /// Create the group; all LEDs start off
    pub fn new(leds: [P; INDICATOR_COUNT]) -> Self {
        let mut indicators = Self { leds };
        indicators.set_level(Level::Low);
        indicators
    }

    /// Drive every LED to `level`
    pub fn set_level(&mut self, level: Level) {
        for led in self.leds.iter_mut() {
            led.set_level(level);
        }
    }

    /// Invert every LED
    pub fn toggle(&mut self) {
        for led in self.leds.iter_mut() {
            led.toggle();
        }
    }

    /// Output latch of each LED
    pub fn levels(&self) -> [bool; INDICATOR_COUNT] {
        [
            self.leds[0].is_set_high(),
            self.leds[1].is_set_high(),
            self.leds[2].is_set_high(),
        ]
    }

    /// Check if every LED is off
    pub fn all_off(&self) -> bool {
        self.leds.iter().all(|led| led.is_set_low())
    }
}

/// Blink phase and period
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    on: bool,
    delay: u32,
    drive: BlinkDrive,
}

impl BlinkState {
    /// Create the blink state in the off phase
    pub fn new(delay: u32, drive: BlinkDrive) -> Self {
        Self {
            on: false,
            delay,
            drive,
        }
    }

    /// Current blink phase
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Blink period in ticks
    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Change the blink period
    pub fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
    }

    /// Indicator drive policy
    pub fn drive(&self) -> BlinkDrive {
        self.drive
    }
}

/// Flip the blink phase and drive the indicators
pub fn blink_task<O: OutputPin, I: InputPin>(app: &mut App<O, I>) {
    if !app.state.run.is_running() {
        blink_idle(app);
        return;
    }

    let blink = &mut app.state.blink;
    blink.on = !blink.on;

    match blink.drive {
        BlinkDrive::Level => app.indicators.set_level(Level::from_bool(blink.on)),
        BlinkDrive::PulseToggle => {
            if blink.on {
                app.indicators.toggle();
            }
        }
    }
}

/// Force the indicators off and reset the phase to match
pub fn blink_idle<O: OutputPin, I: InputPin>(app: &mut App<O, I>) {
    app.indicators.set_level(Level::Low);
    app.state.blink.on = false;
}
