//! Configuration types
//!
//! Everything here is a compile-time constant: task periods, the blink
//! drive policy and the fixed board pin map.

pub mod pins;
pub mod timing;

pub use pins::{PinConflict, PinId, PinMap, Port, PIN_COUNT, PIN_MAP};
pub use timing::*;
