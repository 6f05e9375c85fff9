//! Events emitted by the simulation for audio and visual feedback.

use serde::{Deserialize, Serialize};

/// Discrete events for the frontend, drained into every snapshot.
///
/// Sound events carry no payload; explosion events also carry position,
/// color, and intensity so the renderer can key particle bursts off the
/// same list the audio system consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    // --- Weapon fire ---
    /// Laser shot fired.
    Laser,
    /// Plasma bolt fired.
    Plasma,
    /// Wave fan fired.
    Wave,

    // --- Impacts ---
    /// A shot connected without destroying its target.
    Hit,
    /// Explosion burst below the big-explosion threshold.
    Explosion { x: f64, y: f64, color: String, count: u32 },
    /// Explosion burst at or above the big-explosion threshold.
    BigExplosion { x: f64, y: f64, color: String, count: u32 },

    // --- Progression ---
    /// Power-up satellite collected.
    PowerUp,
    /// Warp transition started.
    Warp,
}
