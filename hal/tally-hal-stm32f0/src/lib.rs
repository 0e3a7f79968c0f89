//! STM32F0-specific HAL for the Tally firmware
//!
//! This crate provides the glue between `tally-hal` traits and
//! embassy-stm32 for the STM32F030 family and its PY32F030 clone:
//!
//! - [`gpio`]: `embedded-hal` pin adapters and the board's line constructors
//! - [`clock`]: 24 MHz HSE clock configuration and bring-up check
//! - [`tick`]: millisecond tick source backed by `embassy-time`
//!
//! # Features
//!
//! - `stm32f030k6` - STM32F030K6 (LQFP32, all counter board pins bonded out)
//! - `stm32f030f4` - STM32F030F4 (TSSOP20, for bring-up boards)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod clock;
pub mod gpio;
pub mod tick;

pub use clock::ClockError;
pub use gpio::{GpioInput, GpioOutput};
pub use tick::EmbassyTick;
