//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state broadcast to the frontend after each tick.
///
/// Entity views are sorted by id so equal simulations serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub wave: u32,
    pub planet_index: usize,
    pub planet_name: String,
    pub warps_to_planet: u32,
    /// Seconds since the last reset; drives attract drift and warp visuals.
    pub world_time: f64,
    /// Seconds since entering gameover/victory.
    pub game_over_timer: f64,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub missiles: Vec<MissileView>,
    pub enemy_bullets: Vec<EnemyBulletView>,
    pub enemies: Vec<EnemyView>,
    pub satellites: Vec<SatelliteView>,
    pub particles: Vec<ParticleView>,
    pub boss: Option<BossView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Player ship state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub lives: u32,
    /// Remaining post-hit invulnerability (seconds).
    pub hit_timer: f64,
    pub weapon: WeaponKind,
    pub shield_active: bool,
    pub upgrades: Vec<UpgradeView>,
    /// Debug invulnerability toggle.
    pub invulnerable: bool,
}

/// One active upgrade with its remaining time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeView {
    pub kind: UpgradeKind,
    pub remaining_secs: f64,
}

/// Player bullet for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub weapon: WeaponKind,
}

/// Missile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u32,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Enemy bullet for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBulletView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

/// Enemy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub health: u32,
    pub entering: bool,
    pub color: String,
}

/// Satellite for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteView {
    pub id: u32,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    /// Remaining lifetime (seconds).
    pub life: f64,
    pub power_up: Option<PowerUpKind>,
    pub color: String,
}

/// Particle for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u32,
    pub kind: ParticleKind,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub size: f64,
    /// Fade fraction in [0, 1]; 0 = expired.
    pub alpha: f64,
    pub color: String,
}

/// Boss encounter state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: BossKind,
    /// Aggregate health ratio in [0, 1] for the boss bar.
    pub health_ratio: f64,
    pub is_destroying: bool,
    /// Seconds into the death sequence once destroying.
    pub death_timer: f64,
    /// Center shake applied during death sequences.
    pub shake_x: f64,
    pub shake_y: f64,
    pub sub_targets: Vec<SubTargetView>,
}

/// An individually destructible boss part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTargetView {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
    pub is_head: bool,
    /// Charging a volley (turret ring only).
    pub charging: bool,
    /// Health fraction in [0, 1].
    pub health_frac: f64,
}
