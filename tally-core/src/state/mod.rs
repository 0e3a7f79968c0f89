//! Application state
//!
//! The run/stop switch and the terminal fault mode. Both are plain values
//! owned by [`crate::app::AppState`]; nothing here is global.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{FaultKind, RunState, SystemMode};
