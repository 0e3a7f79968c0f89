//! Task table
//!
//! The dispatch order is data, not code: [`schedule`] returns the ordered
//! slots the executor walks every iteration. When several tasks are due in
//! the same iteration they run in table order.

use tally_hal::{InputPin, OutputPin};

use crate::app::{App, AppState};
use crate::config::TimingConfig;
use crate::tasks::{blink_idle, blink_task, counter_task, display_task, input_task};

/// Number of scheduler slots
pub const TASK_COUNT: usize = 4;

/// Scheduled tasks, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Display multiplexer
    Display,
    /// Button sampling
    Input,
    /// Counter advance
    Counter,
    /// Indicator blink
    Blink,
}

/// How long a slot waits between firings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Period {
    /// Fixed number of ticks
    Every(u32),
    /// The app's current blink delay
    BlinkDelay,
}

impl Period {
    /// Resolve to ticks against the current state
    pub fn ticks(&self, state: &AppState) -> u32 {
        match self {
            Period::Every(ticks) => *ticks,
            Period::BlinkDelay => state.blink().delay(),
        }
    }
}

/// Task body signature
pub type TaskFn<O, I> = fn(&mut App<O, I>);

/// One scheduler slot
pub struct TaskEntry<O, I> {
    /// Task identity, reported back on dispatch
    pub id: TaskId,
    /// Minimum ticks between firings
    pub period: Period,
    /// Body run when the period has elapsed
    pub run: TaskFn<O, I>,
    /// Called every iteration instead of the period check while stopped
    pub idle: Option<TaskFn<O, I>>,
}

// Manual impls: derive would demand `O: Clone, I: Clone`
impl<O, I> Clone for TaskEntry<O, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, I> Copy for TaskEntry<O, I> {}

/// The firmware's task table
///
/// | Order | Task     | Period              | Idle hook     |
/// |-------|----------|---------------------|---------------|
/// | 1     | Display  | `mux_period`        | -             |
/// | 2     | Input    | `debounce_period`   | -             |
/// | 3     | Counter  | `counter_period`    | -             |
/// | 4     | Blink    | blink delay         | `blink_idle`  |
pub fn schedule<O: OutputPin, I: InputPin>(
    timing: &TimingConfig,
) -> [TaskEntry<O, I>; TASK_COUNT] {
    [
        TaskEntry {
            id: TaskId::Display,
            period: Period::Every(timing.mux_period),
            run: display_task,
            idle: None,
        },
        TaskEntry {
            id: TaskId::Input,
            period: Period::Every(timing.debounce_period),
            run: input_task,
            idle: None,
        },
        TaskEntry {
            id: TaskId::Counter,
            period: Period::Every(timing.counter_period),
            run: counter_task,
            idle: None,
        },
        TaskEntry {
            id: TaskId::Blink,
            period: Period::BlinkDelay,
            run: blink_task,
            idle: Some(blink_idle),
        },
    ]
}
