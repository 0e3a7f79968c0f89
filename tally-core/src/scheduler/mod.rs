//! Task scheduler
//!
//! A non-preemptive round-robin over fixed-period tasks sharing one
//! [`App`](crate::app::App), driven by a single millisecond tick.

pub mod executor;
pub mod table;

pub use executor::{DispatchReport, Scheduler};
pub use table::{schedule, Period, TaskEntry, TaskFn, TaskId, TASK_COUNT};
