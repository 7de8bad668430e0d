//! Shared world state for task browsing BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasklist::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskBrowser, TaskStore},
};

/// Scenario world for task browsing behaviour tests.
pub struct BrowsingWorld {
    pub store: TaskStore<InMemoryTaskRepository>,
    pub browser: TaskBrowser<InMemoryTaskRepository>,
}

impl BrowsingWorld {
    /// Creates a world with an empty store and a browser over it.
    #[must_use]
    pub fn new() -> Self {
        let store = TaskStore::new(Arc::new(InMemoryTaskRepository::new()));
        let browser = TaskBrowser::new(store.clone());
        Self { store, browser }
    }
}

impl Default for BrowsingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BrowsingWorld {
    BrowsingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
