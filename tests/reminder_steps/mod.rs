//! Step definitions and world for reminder scheduling scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
