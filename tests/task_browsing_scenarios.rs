//! Behaviour tests for live task browsing and query precedence.

mod task_browsing_steps;

use rstest_bdd_macros::scenario;
use task_browsing_steps::world::{BrowsingWorld, world};

#[scenario(
    path = "tests/features/task_browsing.feature",
    name = "Search takes precedence over the selected day and filter"
)]
#[tokio::test(flavor = "multi_thread")]
async fn search_takes_precedence(world: BrowsingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_browsing.feature",
    name = "Selecting a non-default filter clears search and day state"
)]
#[tokio::test(flavor = "multi_thread")]
async fn filter_clears_search_and_day(world: BrowsingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_browsing.feature",
    name = "The visible list updates live after a write"
)]
#[tokio::test(flavor = "multi_thread")]
async fn visible_list_updates_live(world: BrowsingWorld) {
    let _ = world;
}
