//! Tally Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the board-agnostic counter logic
//! is written against. Chip-specific crates implement them on top of their
//! own HAL so the same scheduler runs on the target and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tally-firmware (binary)                │
//! └─────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//! ┌───────────────────┐  ┌──────────────────┐
//! │  tally-core       │  │ tally-hal-stm32f0│
//! └───────────────────┘  └──────────────────┘
//!            │                    │
//!            └─────────┬──────────┘
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │  tally-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`tick::TickSource`] - Monotonic millisecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod tick;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
pub use tick::{elapsed, TickSource};
