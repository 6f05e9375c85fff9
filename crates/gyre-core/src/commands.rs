//! Player commands and per-tick input sent from the frontend.
//!
//! Commands are edge-triggered actions, queued for processing at the next
//! tick boundary. Held input arrives separately as an `InputState` snapshot
//! passed into each tick.

use serde::{Deserialize, Serialize};

use crate::enums::Steer;

/// All edge-triggered player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Arm/restart: from attract, gameover, or victory, begins a fresh run.
    Start,
    /// Set time scale (1.0 = normal, clamped to [0, 4]).
    SetTimeScale { scale: f64 },

    // --- Combat ---
    /// Launch a missile. Independent cooldown, blocked outside combat states.
    FireMissile,

    // --- Debug shortcuts ---
    /// Force a warp transition (same guard as the natural trigger).
    TriggerWarp,
    /// Jump straight to a boss encounter; repeat use cycles the variants.
    SkipToBoss,
    /// Toggle debug invulnerability.
    ToggleInvulnerable,
}

/// Held input sampled once per tick. Read-only to the simulation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Left/right steering.
    pub steer: Steer,
    /// Fire button held; shots are gated by the weapon cooldown.
    pub fire_held: bool,
    /// Pointer-derived target angle. Takes precedence over `steer`.
    pub pointer_angle: Option<f64>,
}
