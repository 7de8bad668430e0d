//! Given steps for task browsing scenarios.

use super::world::{BrowsingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::task::domain::{TaskDraft, TaskFilter};

#[given(r#"a task list containing "{first}" and "{second}""#)]
fn task_list_with_two_tasks(
    world: &mut BrowsingWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for title in [first, second] {
        let draft = TaskDraft::new(title).wrap_err("construct task draft")?;
        run_async(world.store.insert(&draft)).wrap_err("insert seed task")?;
    }
    Ok(())
}

#[given("the high priority filter is selected")]
fn high_priority_filter_selected(world: &mut BrowsingWorld) {
    world.browser.set_filter(TaskFilter::HighPriority);
}

#[given("the day starting at epoch millisecond {start_of_day:i64} is selected")]
fn day_selected(world: &mut BrowsingWorld, start_of_day: i64) {
    world.browser.set_selected_day(Some(start_of_day));
}

#[given(r#"the search text "{text}" is entered"#)]
fn search_entered(world: &mut BrowsingWorld, text: String) {
    world.browser.set_search(text);
}

#[given("the visible tasks have been read once")]
fn visible_tasks_read_once(world: &mut BrowsingWorld) -> Result<(), eyre::Report> {
    run_async(world.browser.tasks()).wrap_err("read visible tasks")?;
    Ok(())
}
