//! When steps for reminder scheduling scenarios.

use super::world::ReminderWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a reminder for task {task:i64} titled "{title}" is scheduled {offset:i64} milliseconds ahead"#)]
fn schedule_future_reminder(
    world: &mut ReminderWorld,
    task: i64,
    title: String,
    offset: i64,
) -> Result<(), eyre::Report> {
    world
        .schedule_with_offset(task, &title, offset)
        .wrap_err("schedule reminder")?;
    Ok(())
}

#[when(r#"a reminder for task {task:i64} titled "{title}" is scheduled {offset:i64} milliseconds ago"#)]
fn schedule_past_reminder(
    world: &mut ReminderWorld,
    task: i64,
    title: String,
    offset: i64,
) -> Result<(), eyre::Report> {
    world
        .schedule_with_offset(task, &title, -offset)
        .wrap_err("schedule reminder")?;
    Ok(())
}
