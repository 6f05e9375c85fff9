//! Boss encounters for gyre.
//!
//! Implements the three boss state machines behind a common tagged union,
//! with shared death-sequence timing and per-variant tuning profiles.

pub mod behavior;
pub mod death;
pub mod orbital_core;
pub mod profiles;
pub mod serpent;
pub mod turret_ring;

pub use gyre_core as core;

#[cfg(test)]
mod tests;
