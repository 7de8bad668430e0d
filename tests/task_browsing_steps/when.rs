//! When steps for task browsing scenarios.

use super::world::{BrowsingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::{TaskDraft, TaskFilter};

#[when(r#"the search text "{text}" is entered"#)]
fn enter_search_text(world: &mut BrowsingWorld, text: String) {
    world.browser.set_search(text);
}

#[when("the completed filter is selected")]
fn select_completed_filter(world: &mut BrowsingWorld) {
    world.browser.set_filter(TaskFilter::Completed);
}

#[when(r#"a task titled "{title}" is added"#)]
fn add_task(world: &mut BrowsingWorld, title: String) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title).wrap_err("construct task draft")?;
    run_async(world.store.insert(&draft)).wrap_err("insert task")?;
    Ok(())
}
