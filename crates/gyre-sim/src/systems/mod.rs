//! Simulation systems, run in a fixed order each tick by the engine.

pub mod boss_control;
pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod missiles;
pub mod movement;
pub mod player_control;
pub mod snapshot;
pub mod wave_spawner;
