//! Display refresh task
//!
//! Runs regardless of the run state; a stopped counter must stay visible.

use tally_hal::{InputPin, OutputPin};

use crate::app::App;

/// Refresh the next digit position with the current value
pub fn display_task<O: OutputPin, I: InputPin>(app: &mut App<O, I>) {
    let value = app.state.value;
    app.state.mux.refresh(value, &mut app.display);
}
