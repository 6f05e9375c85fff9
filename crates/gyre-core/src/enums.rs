//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle demo loop, waiting for a start input.
    #[default]
    Attract,
    /// Normal wave combat.
    Playing,
    /// Timed transition sequence between planets.
    Warp,
    /// Bonus stage: one enemy wave, player cannot be rammed.
    Bonus,
    /// Boss encounter active.
    Boss,
    /// Lives exhausted; restart input re-arms.
    GameOver,
    /// Final boss destroyed; restart input re-arms.
    Victory,
}

/// Player weapon selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Base weapon; restored on hit and on timed revert.
    #[default]
    Laser,
    /// Slow, double-damage bolt.
    Plasma,
    /// Three-bullet fan on every shot.
    Wave,
}

/// Timed player upgrade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum UpgradeKind {
    /// Absorbs hits while active.
    Shield,
    /// Doubles fire rate.
    RapidFire,
    /// Fans laser/plasma shots into three.
    TripleShot,
}

/// Enemy hull type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Fighter,
    Saucer,
}

/// Boss encounter variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    /// Segmented chain orbiting in a spiral weave.
    #[default]
    Serpent,
    /// Eight-turret ring alternating orbit and spread formations.
    TurretRing,
    /// Six orbital platforms pulsing around a core.
    OrbitalCore,
}

/// Particle visual category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    #[default]
    Normal,
    Spark,
    Smoke,
}

/// Grant carried by a power-up satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Replaces the current weapon.
    Weapon(WeaponKind),
    /// Installs or refreshes a timed upgrade.
    Upgrade(UpgradeKind),
}

/// Per-tick steering input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    #[default]
    None,
    Right,
}
