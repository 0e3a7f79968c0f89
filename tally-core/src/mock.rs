//! Test doubles for GPIO lines
//!
//! Pins share their level through an `Rc`, so a test keeps a clone of each
//! pin as a probe after moving the pin itself into the code under test.
//! Every write is appended to a shared [`Log`] to check ordering.

extern crate std;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use tally_hal::{InputPin, OutputPin};

use crate::app::App;
use crate::display::DigitRenderer;
use crate::tasks::{Buttons, Indicators};

/// Ordered record of (pin name, level written)
pub type Log = Rc<RefCell<Vec<(&'static str, bool)>>>;

/// Output line that records every write
#[derive(Clone)]
pub struct MockPin {
    name: &'static str,
    high: Rc<Cell<bool>>,
    toggles: Rc<Cell<u32>>,
    log: Log,
}

impl MockPin {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            high: Rc::new(Cell::new(false)),
            toggles: Rc::new(Cell::new(0)),
            log: log.clone(),
        }
    }

    pub fn toggles(&self) -> u32 {
        self.toggles.get()
    }

    fn write(&mut self, high: bool) {
        self.high.set(high);
        self.log.borrow_mut().push((self.name, high));
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.write(true);
    }

    fn set_low(&mut self) {
        self.write(false);
    }

    fn toggle(&mut self) {
        self.toggles.set(self.toggles.get() + 1);
        let next = !self.high.get();
        self.write(next);
    }

    fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

/// Button line with a settable level
#[derive(Clone, Default)]
pub struct MockButton {
    pressed: Rc<Cell<bool>>,
}

impl MockButton {
    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> bool {
        self.pressed.get()
    }
}

pub const SEGMENT_NAMES: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// Probes onto every line of a mock board
pub struct Probes {
    pub log: Log,
    pub segments: [MockPin; 7],
    pub dp: MockPin,
    pub dig1: MockPin,
    pub dig2: MockPin,
    pub leds: [MockPin; 3],
    pub start: MockButton,
    pub stop: MockButton,
}

impl Probes {
    /// Segment bits currently driven high (bit 0 = A)
    pub fn segment_bits(&self) -> u8 {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_set_high())
            .fold(0, |bits, (i, _)| bits | (1 << i))
    }

    pub fn leds_high(&self) -> [bool; 3] {
        [
            self.leds[0].is_set_high(),
            self.leds[1].is_set_high(),
            self.leds[2].is_set_high(),
        ]
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

/// Build a renderer over mock pins
pub fn renderer() -> (DigitRenderer<MockPin>, Probes) {
    let (app, probes) = app();
    let (display, _, _) = app.into_parts();
    (display, probes)
}

/// Build a complete app over mock pins
pub fn app() -> (App<MockPin, MockButton>, Probes) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let segments = SEGMENT_NAMES.map(|name| MockPin::new(name, &log));
    let dp = MockPin::new("DP", &log);
    let dig1 = MockPin::new("DIG1", &log);
    let dig2 = MockPin::new("DIG2", &log);
    let leds = ["LED1", "LED2", "LED3"].map(|name| MockPin::new(name, &log));
    let start = MockButton::default();
    let stop = MockButton::default();

    let probes = Probes {
        log: log.clone(),
        segments: segments.clone(),
        dp: dp.clone(),
        dig1: dig1.clone(),
        dig2: dig2.clone(),
        leds: leds.clone(),
        start: start.clone(),
        stop: stop.clone(),
    };

    let display = DigitRenderer::new(segments, dp, dig1, dig2);
    let indicators = Indicators::new(leds);
    let buttons = Buttons::new(start, stop);
    let app = App::new(display, indicators, buttons, &crate::config::TimingConfig::DEFAULT);

    probes.clear_log();
    (app, probes)
}
