//! Counter board wiring
//!
//! Binds the pins listed in [`PIN_MAP`] to the core drivers. The pins
//! claimed in [`take`] are mirrored in [`CLAIMED`]; the build fails if that
//! drifts from `PIN_MAP` or if `PIN_MAP` assigns a pin twice.

use embassy_stm32::Peripherals;
use tally_core::config::{PinId, PinMap, Port, PIN_MAP};
use tally_core::display::DigitRenderer;
use tally_core::tasks::{Buttons, Indicators};
use tally_hal_stm32f0::gpio::{button_line, display_line, indicator_line, InputLine, OutputLine};

/// Pins claimed by [`take`], in `PinMap` field order
const CLAIMED: PinMap = PinMap {
    segments: [
        PinId::new(Port::A, 5),
        PinId::new(Port::B, 0),
        PinId::new(Port::B, 1),
        PinId::new(Port::A, 15),
        PinId::new(Port::A, 12),
        PinId::new(Port::A, 6),
        PinId::new(Port::A, 3),
    ],
    decimal_point: PinId::new(Port::A, 4),
    units_select: PinId::new(Port::A, 11),
    tens_select: PinId::new(Port::A, 7),
    start_button: PinId::new(Port::A, 1),
    stop_button: PinId::new(Port::A, 2),
    indicators: [
        PinId::new(Port::A, 8),
        PinId::new(Port::A, 9),
        PinId::new(Port::A, 10),
    ],
};

const _: () = assert!(
    CLAIMED.same_pins(&PIN_MAP),
    "board::take claims different pins than PIN_MAP"
);
const _: () = assert!(
    PIN_MAP.find_conflict().is_none(),
    "PIN_MAP assigns a pin twice"
);

/// Driver halves of the application, ready for `App::new`
pub struct Lines {
    pub display: DigitRenderer<OutputLine>,
    pub indicators: Indicators<OutputLine>,
    pub buttons: Buttons<InputLine>,
}

/// Claim every board pin
///
/// All outputs come up low, so the display is blank and the LEDs are off
/// before the first scheduler iteration.
pub fn take(p: Peripherals) -> Lines {
    let segments = [
        display_line(p.PA5),
        display_line(p.PB0),
        display_line(p.PB1),
        display_line(p.PA15),
        display_line(p.PA12),
        display_line(p.PA6),
        display_line(p.PA3),
    ];
    let display = DigitRenderer::new(
        segments,
        display_line(p.PA4),
        display_line(p.PA11),
        display_line(p.PA7),
    );

    let indicators = Indicators::new([
        indicator_line(p.PA8),
        indicator_line(p.PA9),
        indicator_line(p.PA10),
    ]);

    let buttons = Buttons::new(button_line(p.PA1), button_line(p.PA2));

    Lines {
        display,
        indicators,
        buttons,
    }
}
