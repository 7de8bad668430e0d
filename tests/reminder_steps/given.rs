//! Given steps for reminder scheduling scenarios.

use super::world::{ReminderWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::reminder::ports::ReminderStore;

#[given("an empty reminder table")]
fn empty_reminder_table(world: &ReminderWorld) -> Result<(), eyre::Report> {
    let next = run_async(world.store.next_fire_at()).wrap_err("inspect reminder table")?;
    if next.is_some() {
        return Err(eyre::eyre!("expected an empty reminder table"));
    }
    Ok(())
}

#[given(r#"a reminder for task {task:i64} titled "{title}" is scheduled {offset:i64} milliseconds ahead"#)]
fn reminder_already_scheduled(
    world: &mut ReminderWorld,
    task: i64,
    title: String,
    offset: i64,
) -> Result<(), eyre::Report> {
    world
        .schedule_with_offset(task, &title, offset)
        .wrap_err("schedule initial reminder")?;
    Ok(())
}
