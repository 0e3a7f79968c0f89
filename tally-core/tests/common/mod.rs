//! Mock board shared by the integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tally_core::config::TimingConfig;
use tally_core::display::DigitRenderer;
use tally_core::tasks::{Buttons, Indicators};
use tally_core::{App, Scheduler};
use tally_hal::{InputPin, OutputPin};

/// Output line that counts its writes
///
/// Same role as the unit-test `MockPin`, without the ordered write log.
#[derive(Clone, Default)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockPin {
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
    }

    fn set_low(&mut self) {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
    }

    fn toggle(&mut self) {
        self.high.set(!self.high.get());
        self.writes.set(self.writes.get() + 1);
    }

    fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

/// MockButton line with a settable level
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

/// Probes onto every line of a mock board
pub struct Probes {
    pub segments: [MockPin; 7],
    pub dp: MockPin,
    pub dig1: MockPin,
    pub dig2: MockPin,
    pub leds: [MockPin; 3],
    pub start: MockButton,
    pub stop: MockButton,
}

impl Probes {
    pub fn segment_bits(&self) -> u8 {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_set_high())
            .fold(0, |bits, (i, _)| bits | (1 << i))
    }

    pub fn leds_high(&self) -> [bool; 3] {
        [
            self.leds[0].is_set_high(),
            self.leds[1].is_set_high(),
            self.leds[2].is_set_high(),
        ]
    }

    /// (DIG1, DIG2) select levels
    pub fn selects(&self) -> (bool, bool) {
        (self.dig1.is_set_high(), self.dig2.is_set_high())
    }

    pub fn total_writes(&self) -> u32 {
        self.segments.iter().map(MockPin::writes).sum::<u32>()
            + self.dp.writes()
            + self.dig1.writes()
            + self.dig2.writes()
            + self.leds.iter().map(MockPin::writes).sum::<u32>()
    }
}

pub type TestApp = App<MockPin, MockButton>;
pub type TestScheduler = Scheduler<MockPin, MockButton>;

/// Build an app, its scheduler and the probes onto its lines
pub fn rig(timing: &TimingConfig) -> (TestApp, TestScheduler, Probes) {
    let probes = Probes {
        segments: Default::default(),
        dp: MockPin::default(),
        dig1: MockPin::default(),
        dig2: MockPin::default(),
        leds: Default::default(),
        start: MockButton::default(),
        stop: MockButton::default(),
    };

    let display = DigitRenderer::new(
        probes.segments.clone(),
        probes.dp.clone(),
        probes.dig1.clone(),
        probes.dig2.clone(),
    );
    let indicators = Indicators::new(probes.leds.clone());
    let buttons = Buttons::new(probes.start.clone(), probes.stop.clone());

    let app = App::new(display, indicators, buttons, timing);
    (app, Scheduler::new(timing), probes)
}
