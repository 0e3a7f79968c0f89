//! Input events
//!
//! Produced by the input task from a debounced button sample and consumed
//! by [`RunState::transition`](super::RunState::transition).

/// Button events recognised by the input task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start button (A) held at the sampling instant
    StartPressed,
    /// Stop button (B) held at the sampling instant, start not held
    StopPressed,
}
