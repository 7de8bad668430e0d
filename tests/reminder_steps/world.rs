//! Shared world state for reminder scheduling BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rstest::fixture;
use tasklist::reminder::adapters::memory::InMemoryReminderStore;
use tasklist::reminder::services::{ReminderScheduleResult, ReminderScheduler, ScheduleOutcome};
use tasklist::task::domain::TaskId;

/// Scenario world for reminder scheduling behaviour tests.
pub struct ReminderWorld {
    pub store: Arc<InMemoryReminderStore>,
    pub scheduler: ReminderScheduler<InMemoryReminderStore, DefaultClock>,
    /// Fire instants requested per task, keyed by raw task id.
    pub requested: HashMap<i64, i64>,
}

impl ReminderWorld {
    /// Creates a world with an empty pending-reminder table.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryReminderStore::new());
        let scheduler = ReminderScheduler::new(Arc::clone(&store), Arc::new(DefaultClock));
        Self {
            store,
            scheduler,
            requested: HashMap::new(),
        }
    }

    /// Schedules a reminder offset from the current instant, recording the
    /// requested fire instant when the scheduler registers it.
    pub fn schedule_with_offset(
        &mut self,
        task: i64,
        title: &str,
        offset_millis: i64,
    ) -> ReminderScheduleResult<ScheduleOutcome> {
        let fire_at = DefaultClock.utc().timestamp_millis() + offset_millis;
        let outcome = run_async(
            self.scheduler
                .schedule(TaskId::from_raw(task), title, fire_at),
        )?;
        if outcome == ScheduleOutcome::Scheduled {
            self.requested.insert(task, fire_at);
        }
        Ok(outcome)
    }
}

impl Default for ReminderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReminderWorld {
    ReminderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
