//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Player-origin bullet flying inward along a fixed bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub angle: f64,
    pub radius: f64,
    /// Radial speed (world units/s); subtracted each tick.
    pub speed: f64,
    /// Damage per hit. Applied in full to boss sub-targets;
    /// enemies always lose one health per hit.
    pub damage: u32,
    pub weapon: WeaponKind,
}

/// Area-damage missile flying inward toward the world center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub angle: f64,
    pub radius: f64,
}

/// Straight-line enemy projectile aimed at a position snapshot.
/// Does not home.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Remaining lifetime (seconds).
    pub life: f64,
}

/// Wave enemy with two-phase polar motion: a linear "entering" run to
/// `target_radius`, then a sinusoidal hover around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub angle: f64,
    pub radius: f64,
    /// Angular velocity (rad/s, signed).
    pub angular_speed: f64,
    pub target_radius: f64,
    /// Entering-phase radial speed.
    pub enter_speed: f64,
    pub entering: bool,
    /// Hover parameters, randomized per enemy so swarms desynchronize.
    pub loop_amplitude: f64,
    pub loop_frequency: f64,
    pub loop_phase: f64,
    /// Seconds since spawn; drives the hover oscillation.
    pub time: f64,
    pub health: u32,
    pub points: u32,
    /// Countdown to the next shot.
    pub fire_timer: f64,
    /// Hull color, also used as the explosion tint.
    pub color: String,
}

/// Power-up delivery satellite drifting inward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Satellite {
    pub angle: f64,
    pub radius: f64,
    /// Remaining lifetime (seconds).
    pub life: f64,
    /// Grant delivered when shot down, if this one carries a power-up.
    pub power_up: Option<PowerUpKind>,
    pub color: String,
}

/// Visual debris particle. Cannot be hit and carries no gameplay effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: DVec2,
    pub vel: DVec2,
    pub age: f64,
    pub life: f64,
    pub rotation: f64,
    pub rot_speed: f64,
    pub size: f64,
    pub color: String,
}
