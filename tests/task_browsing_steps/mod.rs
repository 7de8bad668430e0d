//! Step definitions and world for task browsing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
