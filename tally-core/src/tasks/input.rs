//! Button input task
//!
//! There is no debounce counter. The scheduler samples the buttons every
//! debounce period, and a press only counts if the line is high at that
//! instant. Bounces between samples are never seen.

use tally_hal::{InputPin, OutputPin};

use crate::app::App;
use crate::state::Event;

/// Start/stop button pair
///
/// Both lines idle low through pull-downs; pressed reads high.
pub struct Buttons<I> {
    start: I,
    stop: I,
}

impl<I: InputPin> Buttons<I> {
    /// Create the button pair
    pub fn new(start: I, stop: I) -> Self {
        Self { start, stop }
    }

    /// Sample both buttons
    ///
    /// Start wins when both are held; stop is only read if start is not.
    pub fn sample(&mut self) -> Option<Event> {
        if self.start.is_high() {
            Some(Event::StartPressed)
        } else if self.stop.is_high() {
            Some(Event::StopPressed)
        } else {
            None
        }
    }
}

/// Sample the buttons and update the run state
pub fn input_task<O: OutputPin, I: InputPin>(app: &mut App<O, I>) {
    if let Some(event) = app.buttons.sample() {
        app.state.run = app.state.run.transition(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::state::RunState;

    #[test]
    fn test_no_press_keeps_state() {
        let (mut app, _probes) = mock::app();
        input_task(&mut app);
        assert_eq!(app.state().run_state(), RunState::Running);

        let mut app = app.with_run_state(RunState::Stopped);
        input_task(&mut app);
        assert_eq!(app.state().run_state(), RunState::Stopped);
    }

    #[test]
    fn test_stop_then_start() {
        let (mut app, probes) = mock::app();

        probes.stop.press();
        input_task(&mut app);
        assert_eq!(app.state().run_state(), RunState::Stopped);

        probes.stop.release();
        probes.start.press();
        input_task(&mut app);
        assert_eq!(app.state().run_state(), RunState::Running);
    }

    #[test]
    fn test_start_has_priority() {
        let (app, probes) = mock::app();
        let mut app = app.with_run_state(RunState::Stopped);

        probes.start.press();
        probes.stop.press();
        input_task(&mut app);
        assert_eq!(app.state().run_state(), RunState::Running);
    }

    #[test]
    fn test_sample_events() {
        let (start, stop) = (mock::MockButton::default(), mock::MockButton::default());
        let mut buttons = Buttons::new(start.clone(), stop.clone());

        assert_eq!(buttons.sample(), None);
        stop.press();
        assert_eq!(buttons.sample(), Some(Event::StopPressed));
        start.press();
        assert_eq!(buttons.sample(), Some(Event::StartPressed));
    }
}
