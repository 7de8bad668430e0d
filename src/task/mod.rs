//! Task storage, live queries, and query composition.
//!
//! This module persists task records, exposes every read as a live query
//! whose results re-emit after each affecting write, derives the active
//! query from transient view state, and orchestrates the save flow. It
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
