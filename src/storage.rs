//! Embedded `SQLite` database handle shared by the task and reminder stores.
//!
//! One database file holds the `tasks` table and the `reminders`
//! pending-alarm table. Schema management is deliberately destructive: when
//! the recorded schema version differs from the current one, every table is
//! dropped and recreated. The application's data volume does not warrant a
//! migration discipline.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

/// Connection pool type shared by the `SQLite` adapters.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema version recorded in `PRAGMA user_version`.
const SCHEMA_VERSION: i32 = 1;

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    priority TEXT NOT NULL,
    due_date BIGINT,
    completed BOOLEAN NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS reminders (
    task_id BIGINT PRIMARY KEY,
    title TEXT NOT NULL,
    fire_at BIGINT NOT NULL
);
";

const DROP_TABLES: &str = "
DROP TABLE IF EXISTS tasks;
DROP TABLE IF EXISTS reminders;
";

/// Errors raised while opening or bootstrapping the database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection pool construction or checkout failed.
    #[error("connection pool failure: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Schema bootstrap failed.
    #[error("schema bootstrap failure: {0}")]
    Bootstrap(#[from] diesel::result::Error),
}

/// Applies per-connection pragmas to every pooled connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Handle to the embedded database; clones share one pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the database at `database_url`, creating it if needed and
    /// bootstrapping the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the pool cannot be built or the schema
    /// bootstrap fails.
    pub fn open(database_url: &str) -> Result<Self, StorageError> {
        Self::build(database_url, Pool::builder())
    }

    /// Opens a private in-memory database for tests and ephemeral use.
    ///
    /// The pool is capped at one connection: a `SQLite` in-memory database
    /// is connection-local, so a second connection would see an empty
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the pool cannot be built or the schema
    /// bootstrap fails.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::build(":memory:", Pool::builder().max_size(1))
    }

    fn build(
        database_url: &str,
        builder: diesel::r2d2::Builder<ConnectionManager<SqliteConnection>>,
    ) -> Result<Self, StorageError> {
        let pool = builder
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(ConnectionManager::new(database_url))?;
        let database = Self { pool };
        database.bootstrap()?;
        Ok(database)
    }

    /// Returns a clone of the shared connection pool.
    #[must_use]
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    fn bootstrap(&self) -> Result<(), StorageError> {
        let mut connection = self.pool.get()?;
        if schema_version(&mut connection)? != SCHEMA_VERSION {
            connection.batch_execute(DROP_TABLES)?;
        }
        connection.batch_execute(CREATE_TABLES)?;
        connection.batch_execute(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        Ok(())
    }
}

#[derive(QueryableByName)]
struct UserVersionRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    user_version: i32,
}

fn schema_version(connection: &mut SqliteConnection) -> Result<i32, diesel::result::Error> {
    diesel::sql_query("PRAGMA user_version")
        .get_result::<UserVersionRow>(connection)
        .map(|row| row.user_version)
}
