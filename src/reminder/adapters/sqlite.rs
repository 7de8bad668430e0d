//! `SQLite` adapter for the pending-reminder table.

use crate::reminder::domain::Reminder;
use crate::reminder::ports::{ReminderStore, ReminderStoreError, ReminderStoreResult};
use crate::storage::SqlitePool;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

diesel::table! {
    /// Pending reminders keyed by owning task.
    reminders (task_id) {
        /// Owning task's row id.
        task_id -> BigInt,
        /// Task title delivered as the notification body.
        title -> Text,
        /// Fire instant in epoch milliseconds.
        fire_at -> BigInt,
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = reminders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ReminderRow {
    task_id: i64,
    title: String,
    fire_at: i64,
}

/// `SQLite`-backed pending-reminder table.
///
/// The table lives in the same database as the tasks themselves, which is
/// what makes pending reminders survive process restarts.
#[derive(Debug, Clone)]
pub struct SqliteReminderStore {
    pool: SqlitePool,
}

impl SqliteReminderStore {
    /// Creates a store from the shared connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReminderStoreResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> ReminderStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReminderStoreError::storage)?;
            f(&mut connection)
        })
        .await
        .map_err(ReminderStoreError::storage)?
    }
}

fn row_to_reminder(row: ReminderRow) -> Reminder {
    Reminder::new(TaskId::from_raw(row.task_id), row.title, row.fire_at)
}

#[async_trait]
impl ReminderStore for SqliteReminderStore {
    async fn put(&self, reminder: &Reminder) -> ReminderStoreResult<()> {
        let row = ReminderRow {
            task_id: reminder.key().into_inner(),
            title: reminder.title().to_owned(),
            fire_at: reminder.fire_at(),
        };
        self.run_blocking(move |connection| {
            diesel::replace_into(reminders::table)
                .values(&row)
                .execute(connection)
                .map_err(ReminderStoreError::storage)?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, key: TaskId) -> ReminderStoreResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(reminders::table.find(key.into_inner()))
                .execute(connection)
                .map_err(ReminderStoreError::storage)?;
            Ok(())
        })
        .await
    }

    async fn due_by(&self, instant: i64) -> ReminderStoreResult<Vec<Reminder>> {
        self.run_blocking(move |connection| {
            let rows = reminders::table
                .filter(reminders::fire_at.le(instant))
                .order(reminders::fire_at.asc())
                .select(ReminderRow::as_select())
                .load::<ReminderRow>(connection)
                .map_err(ReminderStoreError::storage)?;
            Ok(rows.into_iter().map(row_to_reminder).collect())
        })
        .await
    }

    async fn next_fire_at(&self) -> ReminderStoreResult<Option<i64>> {
        self.run_blocking(move |connection| {
            reminders::table
                .select(diesel::dsl::min(reminders::fire_at))
                .first::<Option<i64>>(connection)
                .map_err(ReminderStoreError::storage)
        })
        .await
    }
}
