//! Run/stop and system mode state
//!
//! Two independent pieces of state:
//!
//! - [`RunState`]: the global pause switch, written only by the input task
//!   and read by the counter and blink tasks.
//! - [`SystemMode`]: whether the scheduler may touch hardware at all. Once
//!   halted, the firmware never leaves that mode.

use super::events::Event;

/// Whether counting and blinking are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Counter advances and indicators blink (power-on state)
    #[default]
    Running,
    /// Counter frozen, indicators held off
    Stopped,
}

impl RunState {
    /// Check if counting/blinking is active
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Process an input event and return the next state
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::StartPressed => RunState::Running,
            Event::StopPressed => RunState::Stopped,
        }
    }
}

/// Types of faults that halt the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Clock tree did not come up as configured
    ClockInit,
}

/// Top-level operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemMode {
    /// Scheduler dispatches tasks normally
    #[default]
    Active,
    /// Fault detected; no task runs and no output changes
    Halted(FaultKind),
}

impl SystemMode {
    /// Check if this is the terminal halted mode
    pub fn is_halted(&self) -> bool {
        matches!(self, SystemMode::Halted(_))
    }

    /// Fault that caused the halt, if any
    pub fn fault(&self) -> Option<FaultKind> {
        match self {
            SystemMode::Halted(kind) => Some(*kind),
            SystemMode::Active => None,
        }
    }

    /// Enter halted mode
    ///
    /// Halting is terminal: an already-halted mode keeps its first fault.
    pub fn halt(self, kind: FaultKind) -> Self {
        match self {
            SystemMode::Active => SystemMode::Halted(kind),
            halted @ SystemMode::Halted(_) => halted,
        }
    }
}
