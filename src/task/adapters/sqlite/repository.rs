//! `SQLite` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::storage::SqlitePool;
use crate::task::{
    domain::{PersistedTask, Priority, Task, TaskDraft, TaskId, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;

/// Ordering expression ranking priorities highest first; rows carrying an
/// unrecognized stored priority sort last.
const PRIORITY_RANK_SQL: &str =
    "CASE priority WHEN 'HIGH' THEN 1 WHEN 'MEDIUM' THEN 2 WHEN 'LOW' THEN 3 ELSE 4 END";

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::storage)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::storage)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(draft);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::storage)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::storage)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::storage)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn fetch(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let fetch_query = query.clone();
        self.run_blocking(move |connection| {
            let rows = load_rows(connection, &fetch_query)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// Runs one query variant with its filtering and ordering rules.
fn load_rows(
    connection: &mut SqliteConnection,
    query: &TaskQuery,
) -> TaskRepositoryResult<Vec<TaskRow>> {
    let result = match query {
        TaskQuery::All => tasks::table
            .order(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::Completed => tasks::table
            .filter(tasks::completed.eq(true))
            .order(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::Incomplete => tasks::table
            .filter(tasks::completed.eq(false))
            .order(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::HighPriority => tasks::table
            .filter(tasks::priority.eq(Priority::High.as_str()))
            .order(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        // SQLite sorts NULL first under ASC, so undated tasks lead.
        TaskQuery::SortedByDueDate => tasks::table
            .order(tasks::due_date.asc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::SortedByPriority => tasks::table
            .order(sql::<Integer>(PRIORITY_RANK_SQL))
            .then_order_by(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::TitleSearch(needle) => tasks::table
            .filter(tasks::title.like(format!("%{needle}%")))
            .order(tasks::id.desc())
            .select(TaskRow::as_select())
            .load(connection),
        TaskQuery::DueWithin(window) => tasks::table
            .filter(tasks::due_date.between(window.start(), window.end()))
            .order(tasks::due_date.asc())
            .select(TaskRow::as_select())
            .load(connection),
    };
    result.map_err(TaskRepositoryError::storage)
}

fn to_new_row(draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        title: draft.title().to_owned(),
        description: draft.description().map(ToOwned::to_owned),
        priority: draft.priority().as_str().to_owned(),
        due_date: draft.due_date(),
        completed: draft.completed(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        completed: task.completed(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        priority: persisted_priority,
        due_date,
        completed,
    } = row;
    let priority =
        Priority::try_from(persisted_priority.as_str()).map_err(TaskRepositoryError::storage)?;
    Ok(Task::from_persisted(PersistedTask {
        id: TaskId::from_raw(id),
        title,
        description,
        priority,
        due_date,
        completed,
    }))
}
