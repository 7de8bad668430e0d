//! Durable one-shot reminders tied to task due dates.
//!
//! Scheduling persists a pending reminder keyed by task id; a delivery loop
//! sleeps until the earliest pending instant and posts through the platform
//! notification sink. Pending reminders survive process restarts because
//! the table lives in the same database as the tasks themselves. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
