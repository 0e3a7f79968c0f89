//! Two-digit multiplexed 7-segment display
//!
//! - [`segments`]: digit → segment pattern lookup
//! - [`value`]: the bounded 0-99 number being shown
//! - [`renderer`]: drives one digit position onto the GPIO lines
//! - [`multiplexer`]: alternates the two positions every firing

pub mod multiplexer;
pub mod renderer;
pub mod segments;
pub mod value;

pub use multiplexer::{MuxPhase, Multiplexer};
pub use renderer::{DigitPosition, DigitRenderer};
pub use segments::{Segments, DIGIT_PATTERNS};
pub use value::DisplayValue;
