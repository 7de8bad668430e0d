//! Live feed behaviour for the task store.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDraft, TaskQuery},
    services::TaskStore,
};
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;

#[fixture]
fn store() -> TaskStore<InMemoryTaskRepository> {
    TaskStore::new(Arc::new(InMemoryTaskRepository::new()))
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title).expect("valid title")
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_emits_the_current_snapshot_first(store: TaskStore<InMemoryTaskRepository>) {
    store
        .insert(&draft("Buy milk"))
        .await
        .expect("insert should succeed");

    let mut feed = store.watch(TaskQuery::All);
    let tasks = feed.next().await.expect("snapshot should load");

    assert_eq!(titles(&tasks), vec!["Buy milk"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_reemits_after_each_affecting_write(store: TaskStore<InMemoryTaskRepository>) {
    let mut feed = store.watch(TaskQuery::All);
    assert!(feed.next().await.expect("snapshot should load").is_empty());

    let task = store
        .insert(&draft("Buy milk"))
        .await
        .expect("insert should succeed");
    let after_insert = feed.next().await.expect("re-emission should load");
    assert_eq!(titles(&after_insert), vec!["Buy milk"]);

    store
        .delete(task.id())
        .await
        .expect("delete should succeed");
    let after_delete = feed.next().await.expect("re-emission should load");
    assert!(after_delete.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_stays_quiet_without_writes(store: TaskStore<InMemoryTaskRepository>) {
    let mut feed = store.watch(TaskQuery::All);
    feed.next().await.expect("snapshot should load");

    let waited = tokio::time::timeout(Duration::from_millis(50), feed.next()).await;

    assert!(waited.is_err(), "no write occurred, so nothing should emit");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_bursts_coalesce_into_the_latest_state(store: TaskStore<InMemoryTaskRepository>) {
    let mut feed = store.watch(TaskQuery::All);
    feed.next().await.expect("snapshot should load");

    store
        .insert(&draft("First"))
        .await
        .expect("insert should succeed");
    store
        .insert(&draft("Second"))
        .await
        .expect("insert should succeed");

    let tasks = feed.next().await.expect("re-emission should load");
    assert_eq!(titles(&tasks), vec!["Second", "First"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_feeds_track_membership_changes(store: TaskStore<InMemoryTaskRepository>) {
    let mut completed_feed = store.watch(TaskQuery::Completed);
    assert!(
        completed_feed
            .next()
            .await
            .expect("snapshot should load")
            .is_empty()
    );

    let mut task = store
        .insert(&draft("Buy milk"))
        .await
        .expect("insert should succeed");
    assert!(
        completed_feed
            .next()
            .await
            .expect("re-emission should load")
            .is_empty()
    );

    task.set_completed(true);
    store.update(&task).await.expect("update should succeed");

    let now_completed = completed_feed.next().await.expect("re-emission should load");
    assert_eq!(titles(&now_completed), vec!["Buy milk"]);
}
