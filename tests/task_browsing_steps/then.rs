//! Then steps for task browsing scenarios.

use super::world::{BrowsingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the visible tasks are "{titles}""#)]
fn visible_tasks_are(world: &mut BrowsingWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = titles.split(", ").map(ToOwned::to_owned).collect();
    let tasks = run_async(world.browser.tasks()).wrap_err("read visible tasks")?;
    let actual: Vec<String> = tasks.iter().map(|task| task.title().to_owned()).collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected visible tasks {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("no tasks are visible")]
fn no_tasks_visible(world: &mut BrowsingWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.browser.tasks()).wrap_err("read visible tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no visible tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the search text is empty")]
fn search_text_is_empty(world: &BrowsingWorld) -> Result<(), eyre::Report> {
    let search = world.browser.view().search();
    if !search.is_empty() {
        return Err(eyre::eyre!("expected empty search text, found {search:?}"));
    }
    Ok(())
}
