//! Tally - Two-Digit Counter Firmware
//!
//! Main firmware binary for PY32F030 / STM32F030 counter boards. A single
//! polling loop reads the millisecond tick and dispatches the display,
//! input, counter and blink tasks from the core scheduler.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use tally_core::config::{TimingConfig, PIN_COUNT};
use tally_core::state::FaultKind;
use tally_core::{App, Scheduler};
use tally_hal_stm32f0::clock;
use tally_hal_stm32f0::tick::EmbassyTick;

mod board;

/// Task periods compiled into the firmware
const TIMING: TimingConfig = TimingConfig::DEFAULT;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Tally firmware starting...");

    // Bring up the 24 MHz HSE clock tree and the time driver
    let p = embassy_stm32::init(clock::config());
    let clock_status = clock::verify();
    info!("Peripherals initialized");

    let lines = board::take(p);
    info!("Pins ready ({} lines), display blanked", PIN_COUNT);
    let mut app = App::new(lines.display, lines.indicators, lines.buttons, &TIMING);
    debug!("Timing: {}", TIMING);

    if let Err(e) = clock_status {
        error!("Clock bring-up failed: {}", e);
        app.halt(FaultKind::ClockInit);
    }

    let tick = EmbassyTick::new();
    let mut scheduler = Scheduler::new(&TIMING);
    info!("Scheduler running");

    let fault = scheduler.run(&tick, &mut app, |report| {
        if let Some(state) = report.run_state_change {
            info!("Run state -> {} at {} ms", state, report.tick);
        }
    });

    error!("Halted: {}", fault);
    loop {
        cortex_m::asm::wfi();
    }
}
