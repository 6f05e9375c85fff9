//! Common boss behavior surface.
//!
//! The three variants sit behind one tagged union so the engine deals with
//! a single type. Bosses never touch the entity world: each step returns a
//! `BossTick` of requested effects (shots, bursts, score, victory) that the
//! engine applies.

use glam::DVec2;
use rand::Rng;

use gyre_core::enums::BossKind;
use gyre_core::state::SubTargetView;

use crate::orbital_core::OrbitalCore;
use crate::serpent::Serpent;
use crate::turret_ring::TurretRing;

/// A bullet request aimed from `origin` toward `target`.
#[derive(Debug, Clone, Copy)]
pub struct ShotSpec {
    pub origin: DVec2,
    pub target: DVec2,
}

/// An explosion burst request.
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub pos: DVec2,
    pub color: &'static str,
    pub count: u32,
}

/// Effects of one boss step, applied by the engine.
#[derive(Debug, Default)]
pub struct BossTick {
    pub shots: Vec<ShotSpec>,
    pub bursts: Vec<BurstSpec>,
    pub score_delta: u32,
    /// Set on the single tick the death sequence completes.
    pub victory: bool,
}

/// A live boss encounter.
pub enum BossState {
    Serpent(Serpent),
    TurretRing(TurretRing),
    OrbitalCore(OrbitalCore),
}

impl BossState {
    /// Create a fresh encounter of the given variant.
    pub fn spawn(kind: BossKind, rng: &mut impl Rng) -> Self {
        match kind {
            BossKind::Serpent => BossState::Serpent(Serpent::new()),
            BossKind::TurretRing => BossState::TurretRing(TurretRing::new(rng)),
            BossKind::OrbitalCore => BossState::OrbitalCore(OrbitalCore::new()),
        }
    }

    pub fn kind(&self) -> BossKind {
        match self {
            BossState::Serpent(_) => BossKind::Serpent,
            BossState::TurretRing(_) => BossKind::TurretRing,
            BossState::OrbitalCore(_) => BossKind::OrbitalCore,
        }
    }

    /// Advance the encounter by one tick.
    pub fn update(&mut self, dt: f64, player_pos: DVec2, rng: &mut impl Rng) -> BossTick {
        match self {
            BossState::Serpent(boss) => boss.update(dt, player_pos, rng),
            BossState::TurretRing(boss) => boss.update(dt, player_pos, rng),
            BossState::OrbitalCore(boss) => boss.update(dt, player_pos, rng),
        }
    }

    /// Apply `damage` to one sub-target. Out-of-range or dead targets no-op.
    pub fn take_damage(&mut self, sub_target: usize, damage: u32) -> BossTick {
        match self {
            BossState::Serpent(boss) => boss.take_damage(sub_target, damage),
            BossState::TurretRing(boss) => boss.take_damage(sub_target, damage),
            BossState::OrbitalCore(boss) => boss.take_damage(sub_target, damage),
        }
    }

    /// Hit-test a bullet position against live sub-targets.
    /// Always `None` while the death sequence runs.
    pub fn check_bullet_collision(&self, point: DVec2) -> Option<usize> {
        match self {
            BossState::Serpent(boss) => boss.check_bullet_collision(point),
            BossState::TurretRing(boss) => boss.check_bullet_collision(point),
            BossState::OrbitalCore(boss) => boss.check_bullet_collision(point),
        }
    }

    pub fn is_destroying(&self) -> bool {
        match self {
            BossState::Serpent(boss) => boss.is_destroying(),
            BossState::TurretRing(boss) => boss.is_destroying(),
            BossState::OrbitalCore(boss) => boss.is_destroying(),
        }
    }

    /// Seconds into the death sequence; 0 until it starts.
    pub fn death_timer(&self) -> f64 {
        match self {
            BossState::Serpent(boss) => boss.death_timer(),
            BossState::TurretRing(boss) => boss.death_timer(),
            BossState::OrbitalCore(boss) => boss.death_timer(),
        }
    }

    /// Aggregate health ratio in [0, 1] for the boss bar.
    pub fn health_ratio(&self) -> f64 {
        match self {
            BossState::Serpent(boss) => boss.health_ratio(),
            BossState::TurretRing(boss) => boss.health_ratio(),
            BossState::OrbitalCore(boss) => boss.health_ratio(),
        }
    }

    /// Center shake applied during death sequences.
    pub fn shake_offset(&self) -> DVec2 {
        match self {
            BossState::Serpent(_) => DVec2::ZERO,
            BossState::TurretRing(boss) => boss.shake_offset(),
            BossState::OrbitalCore(boss) => boss.shake_offset(),
        }
    }

    /// Sub-target states for the snapshot.
    pub fn sub_targets(&self) -> Vec<SubTargetView> {
        match self {
            BossState::Serpent(boss) => boss.sub_targets(),
            BossState::TurretRing(boss) => boss.sub_targets(),
            BossState::OrbitalCore(boss) => boss.sub_targets(),
        }
    }
}
