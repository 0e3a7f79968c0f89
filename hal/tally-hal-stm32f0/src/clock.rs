//! Clock configuration for STM32F0
//!
//! The board runs straight from a 24 MHz crystal: HSE as SYSCLK, no PLL,
//! AHB and APB at full speed.

use embassy_stm32::pac;
use embassy_stm32::rcc::{AHBPrescaler, APBPrescaler, Hse, HseMode, Sysclk};
use embassy_stm32::time::Hertz;

/// External crystal frequency
pub const HSE_FREQ: Hertz = Hertz(24_000_000);

/// Clock bring-up errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// HSE oscillator not ready
    HseNotReady,
    /// SYSCLK is not running from HSE
    WrongSysclkSource,
}

/// Build the embassy config for the board clock tree
pub fn config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    config.rcc.hse = Some(Hse {
        freq: HSE_FREQ,
        mode: HseMode::Oscillator,
    });
    config.rcc.pll = None;
    config.rcc.sys = Sysclk::HSE;
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV1;
    config
}

/// Snapshot of the RCC state that matters after bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockStatus {
    /// HSERDY flag
    pub hse_ready: bool,
    /// SWS reports HSE as the system clock
    pub sysclk_is_hse: bool,
}

impl ClockStatus {
    /// Read the status from RCC
    pub fn read() -> Self {
        let cr = pac::RCC.cr().read();
        let cfgr = pac::RCC.cfgr().read();
        Self {
            hse_ready: cr.hserdy(),
            sysclk_is_hse: cfgr.sws().to_bits() == Sysclk::HSE.to_bits(),
        }
    }

    /// Check the clock tree came up as configured by [`config`]
    pub fn check(&self) -> Result<(), ClockError> {
        if !self.hse_ready {
            return Err(ClockError::HseNotReady);
        }
        if !self.sysclk_is_hse {
            return Err(ClockError::WrongSysclkSource);
        }
        Ok(())
    }
}

/// Verify the clock tree after `embassy_stm32::init`
pub fn verify() -> Result<(), ClockError> {
    ClockStatus::read().check()
}
