//! Board-agnostic core logic for the Tally counter firmware
//!
//! This crate contains all application logic that does not depend on a
//! specific chip:
//!
//! - Display: segment table, digit renderer, two-digit multiplexer
//! - Tasks: input sampling, counter, indicator blink
//! - Cooperative scheduler over a fixed task table
//! - Run/stop and halt state
//! - Compile-time timing and pin configuration
//!
//! Hardware is reached only through the `tally-hal` traits, so the whole
//! crate runs in host tests against mock pins.

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod display;
pub mod scheduler;
pub mod state;
pub mod tasks;

#[cfg(test)]
mod mock;

pub use app::{App, AppState};
pub use scheduler::{DispatchReport, Scheduler, TaskId};
