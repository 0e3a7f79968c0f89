//! Task timing configuration
//!
//! All periods are in scheduler ticks (milliseconds).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display multiplex period: each digit is refreshed every 10 ms
pub const MUX_PERIOD_MS: u32 = 5;

/// Button sampling period, which doubles as the debounce interval
pub const DEBOUNCE_PERIOD_MS: u32 = 200;

/// Counter advance period
pub const COUNTER_PERIOD_MS: u32 = 300;

/// Initial blink delay (adjustable at runtime)
pub const DEFAULT_BLINK_DELAY_MS: u32 = 250;

/// How the blink task drives the indicator lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlinkDrive {
    /// Write every indicator to the level matching the blink phase
    #[default]
    Level,
    /// Toggle the indicators when the phase turns on, write nothing when
    /// it turns off. The lines change every second period.
    PulseToggle,
}

/// Scheduler timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Display multiplexer period
    pub mux_period: u32,
    /// Button sampling period
    pub debounce_period: u32,
    /// Counter advance period
    pub counter_period: u32,
    /// Initial blink period
    pub blink_delay: u32,
    /// Indicator drive policy
    pub blink_drive: BlinkDrive,
}

impl TimingConfig {
    /// Board defaults
    pub const DEFAULT: Self = Self {
        mux_period: MUX_PERIOD_MS,
        debounce_period: DEBOUNCE_PERIOD_MS,
        counter_period: COUNTER_PERIOD_MS,
        blink_delay: DEFAULT_BLINK_DELAY_MS,
        blink_drive: BlinkDrive::Level,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
