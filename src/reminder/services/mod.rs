//! Application services for reminder scheduling and delivery.

mod runner;
mod scheduler;

pub use runner::{ReminderRunError, ReminderRunResult, ReminderRunner};
pub use scheduler::{
    ReminderScheduleError, ReminderScheduleResult, ReminderScheduler, ScheduleOutcome,
};
