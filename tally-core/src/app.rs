//! Application context
//!
//! All mutable state of the firmware lives in one [`App`], owned by the
//! entry point and lent to each task function for the duration of its
//! firing. Every field has exactly one writer:
//!
//! | Field             | Writer              |
//! |-------------------|---------------------|
//! | `run`             | input task          |
//! | `value`           | counter task        |
//! | `mux`             | display multiplexer |
//! | `blink`           | blink task          |
//! | `mode`            | [`App::halt`]       |
//!
//! Task timestamps are not here; they belong to the scheduler.

use tally_hal::{InputPin, OutputPin};

use crate::config::TimingConfig;
use crate::display::{DigitRenderer, DisplayValue, Multiplexer};
use crate::state::{FaultKind, RunState, SystemMode};
use crate::tasks::{BlinkState, Buttons, Indicators};

/// Hardware-independent state shared by the tasks
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppState {
    pub(crate) run: RunState,
    pub(crate) value: DisplayValue,
    pub(crate) mux: Multiplexer,
    pub(crate) blink: BlinkState,
    pub(crate) mode: SystemMode,
}

impl AppState {
    /// Power-on state
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            run: RunState::default(),
            value: DisplayValue::ZERO,
            mux: Multiplexer::new(),
            blink: BlinkState::new(timing.blink_delay, timing.blink_drive),
            mode: SystemMode::Active,
        }
    }

    /// Current run/stop state
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Number on the display
    pub fn display_value(&self) -> DisplayValue {
        self.value
    }

    /// Multiplexer (phase of the next refresh)
    pub fn multiplexer(&self) -> &Multiplexer {
        &self.mux
    }

    /// Blink phase and period
    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }

    /// Operating mode
    pub fn mode(&self) -> SystemMode {
        self.mode
    }
}

/// State plus the hardware the tasks drive
pub struct App<O, I> {
    pub(crate) state: AppState,
    pub(crate) display: DigitRenderer<O>,
    pub(crate) indicators: Indicators<O>,
    pub(crate) buttons: Buttons<I>,
}

impl<O: OutputPin, I: InputPin> App<O, I> {
    /// Create the application context in its power-on state
    pub fn new(
        display: DigitRenderer<O>,
        indicators: Indicators<O>,
        buttons: Buttons<I>,
        timing: &TimingConfig,
    ) -> Self {
        Self {
            state: AppState::new(timing),
            display,
            indicators,
            buttons,
        }
    }

    /// Start from `value` instead of zero
    pub fn with_value(mut self, value: DisplayValue) -> Self {
        self.state.value = value;
        self
    }

    /// Start stopped instead of running
    pub fn with_run_state(mut self, run: RunState) -> Self {
        self.state.run = run;
        self
    }

    /// Shared state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Display renderer
    pub fn display(&self) -> &DigitRenderer<O> {
        &self.display
    }

    /// Indicator LEDs
    pub fn indicators(&self) -> &Indicators<O> {
        &self.indicators
    }

    /// Change the blink period; applies from the next period check
    pub fn set_blink_delay(&mut self, delay: u32) {
        self.state.blink.set_delay(delay);
    }

    /// Enter the terminal halted mode
    ///
    /// After this no task runs, so every output keeps its current level.
    pub fn halt(&mut self, kind: FaultKind) {
        self.state.mode = self.state.mode.halt(kind);
    }

    /// Check if the app is halted
    pub fn is_halted(&self) -> bool {
        self.state.mode.is_halted()
    }

    /// Give the hardware back
    pub fn into_parts(self) -> (DigitRenderer<O>, Indicators<O>, Buttons<I>) {
        (self.display, self.indicators, self.buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlinkDrive;
    use crate::display::MuxPhase;
    use crate::mock;

    #[test]
    fn test_power_on_state() {
        let (app, probes) = mock::app();
        let state = app.state();

        assert_eq!(state.run_state(), RunState::Running);
        assert_eq!(state.display_value(), DisplayValue::ZERO);
        assert_eq!(state.multiplexer().phase(), MuxPhase::ShowUnits);
        assert!(!state.blink().is_on());
        assert_eq!(state.blink().delay(), 250);
        assert_eq!(state.blink().drive(), BlinkDrive::Level);
        assert_eq!(state.mode(), SystemMode::Active);

        // Everything starts dark
        assert_eq!(probes.segment_bits(), 0);
        assert_eq!(probes.leds_high(), [false; 3]);
    }

    #[test]
    fn test_builders() {
        let (app, _probes) = mock::app();
        let app = app
            .with_value(DisplayValue::new(42).unwrap())
            .with_run_state(RunState::Stopped);
        assert_eq!(app.state().display_value().get(), 42);
        assert_eq!(app.state().run_state(), RunState::Stopped);
    }

    #[test]
    fn test_halt() {
        let (mut app, _probes) = mock::app();
        assert!(!app.is_halted());
        app.halt(FaultKind::ClockInit);
        assert!(app.is_halted());
        assert_eq!(app.state().mode().fault(), Some(FaultKind::ClockInit));
    }

    #[test]
    fn test_set_blink_delay() {
        let (mut app, _probes) = mock::app();
        app.set_blink_delay(100);
        assert_eq!(app.state().blink().delay(), 100);
    }
}
