//! Periodic task bodies
//!
//! Each task is a plain function over the [`App`](crate::app::App). They
//! never block and do a bounded amount of work, so the loop latency stays
//! at the multiplex period however many tasks fire in one iteration.
//! When a task fires is the scheduler's business, not theirs.

pub mod blink;
pub mod counter;
pub mod display;
pub mod input;

pub use blink::{blink_idle, blink_task, BlinkState, Indicators, INDICATOR_COUNT};
pub use counter::counter_task;
pub use display::display_task;
pub use input::{input_task, Buttons};
