//! Variant-specific tuning profiles.
//!
//! Consolidates the per-variant parameters shared across spawn, damage,
//! collision, and death handling. Motion constants unique to one variant
//! stay in that variant's module.

use gyre_core::enums::BossKind;

/// Tuning profile for a boss variant.
pub struct BossProfile {
    /// Number of destructible sub-targets.
    pub sub_target_count: usize,
    /// Health per body sub-target.
    pub sub_target_health: u32,
    /// Health of the head/leader sub-target.
    pub head_health: u32,
    /// Formation orbit radius around the world center.
    pub orbit_radius: f64,
    /// Base rotation rate (rad/s) before difficulty scaling.
    pub rotation_speed: f64,
    /// Hit radius for body sub-targets.
    pub hit_radius: f64,
    /// Hit radius for the head sub-target.
    pub head_hit_radius: f64,
    /// Seconds the death sequence runs before the terminal burst.
    pub death_duration: f64,
    /// Score for destroying a body sub-target.
    pub sub_target_score: u32,
    /// Score for destroying the head.
    pub head_score: u32,
    /// Score awarded once at the terminal burst.
    pub victory_score: u32,
}

/// Get the tuning profile for a boss variant.
pub fn get_profile(kind: BossKind) -> BossProfile {
    match kind {
        BossKind::Serpent => BossProfile {
            sub_target_count: 10,
            sub_target_health: 3,
            head_health: 5,
            orbit_radius: 140.0,
            rotation_speed: 1.8,
            hit_radius: 15.0,
            head_hit_radius: 25.0,
            death_duration: 4.0,
            sub_target_score: 500,
            head_score: 2000,
            victory_score: 10_000,
        },
        BossKind::TurretRing => BossProfile {
            sub_target_count: 8,
            sub_target_health: 15,
            head_health: 15,
            orbit_radius: 200.0,
            rotation_speed: 1.2,
            hit_radius: 25.0,
            head_hit_radius: 25.0,
            death_duration: 5.0,
            sub_target_score: 1000,
            head_score: 1000,
            victory_score: 15_000,
        },
        BossKind::OrbitalCore => BossProfile {
            sub_target_count: 6,
            sub_target_health: 20,
            head_health: 20,
            orbit_radius: 220.0,
            rotation_speed: 2.0,
            hit_radius: 30.0,
            head_hit_radius: 30.0,
            death_duration: 6.0,
            sub_target_score: 1500,
            head_score: 1500,
            victory_score: 25_000,
        },
    }
}
