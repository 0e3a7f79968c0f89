//! Counter task

use tally_hal::{InputPin, OutputPin};

use crate::app::App;

/// Advance the displayed value by one, wrapping 99 → 0
///
/// Does nothing while stopped.
pub fn counter_task<O: OutputPin, I: InputPin>(app: &mut App<O, I>) {
    if app.state.run.is_running() {
        app.state.value.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayValue;
    use crate::mock;
    use crate::state::RunState;

    #[test]
    fn test_counts_when_running() {
        let (mut app, _probes) = mock::app();
        counter_task(&mut app);
        counter_task(&mut app);
        assert_eq!(app.state().display_value().get(), 2);
    }

    #[test]
    fn test_frozen_when_stopped() {
        let (app, _probes) = mock::app();
        let mut app = app
            .with_value(DisplayValue::new(12).unwrap())
            .with_run_state(RunState::Stopped);
        for _ in 0..5 {
            counter_task(&mut app);
        }
        assert_eq!(app.state().display_value().get(), 12);
    }

    #[test]
    fn test_full_cycle() {
        let (mut app, _probes) = mock::app();
        for expected in (1..=99).chain(0..=5) {
            counter_task(&mut app);
            assert_eq!(app.state().display_value().get(), expected);
        }
    }
}
