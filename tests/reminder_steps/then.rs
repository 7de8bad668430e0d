//! Then steps for reminder scheduling scenarios.

use super::world::{ReminderWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasklist::reminder::domain::Reminder;
use tasklist::reminder::ports::ReminderStore;
use tasklist::task::domain::TaskId;

fn pending_reminders(world: &ReminderWorld) -> Result<Vec<Reminder>, eyre::Report> {
    run_async(world.store.due_by(i64::MAX)).wrap_err("inspect reminder table")
}

fn expect_pending_count(world: &ReminderWorld, expected: usize) -> Result<(), eyre::Report> {
    let pending = pending_reminders(world)?;
    if pending.len() != expected {
        return Err(eyre::eyre!(
            "expected {expected} pending reminder(s), found {}",
            pending.len()
        ));
    }
    Ok(())
}

#[then("exactly {count:usize} reminder is pending")]
fn exactly_one_reminder_pending(
    world: &ReminderWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    expect_pending_count(world, count)
}

#[then("exactly {count:usize} reminders are pending")]
fn exactly_n_reminders_pending(
    world: &ReminderWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    expect_pending_count(world, count)
}

#[then("no reminder is pending")]
fn no_reminder_pending(world: &ReminderWorld) -> Result<(), eyre::Report> {
    expect_pending_count(world, 0)
}

#[then("the pending reminder for task {task:i64} fires at the requested instant")]
fn pending_reminder_fires_at_requested_instant(
    world: &ReminderWorld,
    task: i64,
) -> Result<(), eyre::Report> {
    let requested = world
        .requested
        .get(&task)
        .copied()
        .ok_or_else(|| eyre::eyre!("no recorded schedule request for task {task}"))?;
    let pending = pending_reminders(world)?;
    let reminder = pending
        .iter()
        .find(|reminder| reminder.key() == TaskId::from_raw(task))
        .ok_or_else(|| eyre::eyre!("no pending reminder for task {task}"))?;

    if reminder.fire_at() != requested {
        return Err(eyre::eyre!(
            "expected fire instant {requested}, found {}",
            reminder.fire_at()
        ));
    }
    Ok(())
}
