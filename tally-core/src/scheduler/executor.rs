//! Cooperative scheduler loop
//!
//! Reads the tick once per iteration and walks the task table in order.
//! A slot fires when `now - last_fired >= period` (wrapping), or when it
//! has never fired, and its timestamp is set to `now` right after the body
//! returns. While stopped,
//! a slot with an idle hook runs that hook on every iteration instead, and
//! its timestamp is left alone.
//!
//! A slot without an idle hook keeps its cadence while stopped: the
//! counter slot still fires (its body does nothing) and is re-stamped, so
//! after a start press the first advance comes at most one counter period
//! later.

use heapless::Vec;
use tally_hal::{elapsed, InputPin, OutputPin, TickSource};

use super::table::{schedule, TaskEntry, TaskId, TASK_COUNT};
use crate::app::App;
use crate::config::TimingConfig;
use crate::state::{FaultKind, RunState};

/// What happened during one iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchReport {
    /// Tick the iteration ran at
    pub tick: u32,
    /// Slots whose period elapsed and whose body ran, in order
    pub fired: Vec<TaskId, TASK_COUNT>,
    /// Slots whose idle hook ran
    pub idled: Vec<TaskId, TASK_COUNT>,
    /// New run state, if the iteration changed it
    pub run_state_change: Option<RunState>,
}

impl DispatchReport {
    /// Check if `id` fired this iteration
    pub fn did_fire(&self, id: TaskId) -> bool {
        self.fired.contains(&id)
    }

    /// Check if `id`'s idle hook ran this iteration
    pub fn did_idle(&self, id: TaskId) -> bool {
        self.idled.contains(&id)
    }
}

/// Fixed-period round-robin scheduler
pub struct Scheduler<O, I> {
    table: [TaskEntry<O, I>; TASK_COUNT],
    last_fired: [Option<u32>; TASK_COUNT],
    iterations: u32,
}

impl<O: OutputPin, I: InputPin> Scheduler<O, I> {
    /// Create a scheduler over the firmware task table
    ///
    /// No slot has fired yet, so every task is due on the first poll.
    pub fn new(timing: &TimingConfig) -> Self {
        Self::with_table(schedule(timing))
    }

    /// Create a scheduler over a custom table
    pub fn with_table(table: [TaskEntry<O, I>; TASK_COUNT]) -> Self {
        Self {
            table,
            last_fired: [None; TASK_COUNT],
            iterations: 0,
        }
    }

    /// Run one loop iteration at tick `now`
    ///
    /// Does nothing once the app is halted.
    pub fn poll(&mut self, now: u32, app: &mut App<O, I>) -> DispatchReport {
        let mut report = DispatchReport {
            tick: now,
            ..Default::default()
        };

        if app.is_halted() {
            return report;
        }

        self.iterations = self.iterations.wrapping_add(1);
        let run_before = app.state.run;

        for (entry, last_fired) in self.table.iter().zip(self.last_fired.iter_mut()) {
            if let Some(idle) = entry.idle {
                if !app.state.run.is_running() {
                    idle(app);
                    // Vec capacity equals the table size
                    let _ = report.idled.push(entry.id);
                    continue;
                }
            }

            let period = entry.period.ticks(&app.state);
            let due = match *last_fired {
                Some(at) => elapsed(now, at) >= period,
                None => true,
            };
            if due {
                (entry.run)(app);
                *last_fired = Some(now);
                let _ = report.fired.push(entry.id);
            }
        }

        if app.state.run != run_before {
            report.run_state_change = Some(app.state.run);
        }

        report
    }

    /// Poll forever, reading `tick` once per iteration
    ///
    /// `on_dispatch` sees every report. Returns only when the app is
    /// halted, with the fault that halted it.
    pub fn run<T, F>(&mut self, tick: &T, app: &mut App<O, I>, mut on_dispatch: F) -> FaultKind
    where
        T: TickSource,
        F: FnMut(&DispatchReport),
    {
        loop {
            if let Some(fault) = app.state.mode.fault() {
                return fault;
            }
            let report = self.poll(tick.now_ms(), app);
            on_dispatch(&report);
        }
    }

    /// Tick at which `id` last fired, `None` before its first firing
    pub fn last_fired(&self, id: TaskId) -> Option<u32> {
        self.table
            .iter()
            .position(|e| e.id == id)
            .and_then(|i| self.last_fired[i])
    }

    /// Loop iterations run so far (wrapping)
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}
