//! Simulation engine for gyre.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod engine;
pub mod player;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use gyre_core as core;

#[cfg(test)]
mod tests;
