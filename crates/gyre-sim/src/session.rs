//! Per-run session bookkeeping.

use gyre_core::constants::{FIRST_SPAWN_DELAY_SECS, WARPS_PER_PLANET};

/// Score, progression, and spawn pacing for one run.
///
/// Replaced wholesale on restart; nothing here survives across runs.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub score: u32,
    /// Current wave number. The first wave spawned after a reset is 1.
    pub wave: u32,
    /// Index into `PLANETS`. The final index hosts the boss encounter.
    pub planet_index: usize,
    /// Warps remaining before the next planet arrival.
    pub warps_to_planet: u32,
    /// Countdown to the next spawn decision while the field is clear.
    pub spawn_timer: f64,
    /// Seconds since the last reset. Advances in every phase.
    pub world_time: f64,
    /// Seconds since entering gameover or victory.
    pub game_over_timer: f64,
    /// Satellite mini-waves launched in the current power-up phase.
    pub waves_completed: u32,
    /// Satellites destroyed in the current mini-wave.
    pub destroyed_count: u32,
    /// Satellites spawned in the current mini-wave.
    pub in_current_wave_count: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            wave: 0,
            planet_index: 0,
            warps_to_planet: WARPS_PER_PLANET,
            spawn_timer: FIRST_SPAWN_DELAY_SECS,
            world_time: 0.0,
            game_over_timer: 0.0,
            waves_completed: 0,
            destroyed_count: 0,
            in_current_wave_count: 0,
        }
    }
}
