//! Player ship state: orbit position, lives, weapon, and timed upgrades.

use std::collections::BTreeMap;

use glam::DVec2;

use gyre_core::constants::{
    PLAYER_HIT_INVULN_SECS, PLAYER_ORBIT_RADIUS, PLAYER_RESET_ANGLE, PLAYER_START_LIVES,
    STRIP_ARSENAL_ON_HIT, WEAPON_REVERT_SECS,
};
use gyre_core::enums::{PowerUpKind, UpgradeKind, WeaponKind};
use gyre_core::types::polar_to_cartesian;
use gyre_core::weapons::upgrade_spec;

/// The player ship. Not an ECS entity: there is exactly one, it never
/// despawns, and most systems need it by reference.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Position on the orbit ring (radians).
    pub angle: f64,
    pub lives: u32,
    /// Post-hit invulnerability countdown.
    pub hit_timer: f64,
    /// Weapon cooldown countdown.
    pub fire_timer: f64,
    /// Missile cooldown countdown.
    pub missile_timer: f64,
    pub weapon: WeaponKind,
    /// Seconds the current non-base weapon has been held.
    pub weapon_timer: f64,
    /// Active upgrades and their remaining seconds.
    pub upgrades: BTreeMap<UpgradeKind, f64>,
    /// Debug invulnerability toggle.
    pub invulnerable: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            angle: PLAYER_RESET_ANGLE,
            lives: PLAYER_START_LIVES,
            hit_timer: PLAYER_HIT_INVULN_SECS,
            fire_timer: 0.0,
            missile_timer: 0.0,
            weapon: WeaponKind::Laser,
            weapon_timer: 0.0,
            upgrades: BTreeMap::new(),
            invulnerable: false,
        }
    }

    /// Restore spawn state for a fresh run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance cooldowns, upgrade lifetimes, and the weapon revert clock.
    pub fn update_timers(&mut self, dt: f64) {
        if self.fire_timer > 0.0 {
            self.fire_timer -= dt;
        }
        if self.missile_timer > 0.0 {
            self.missile_timer -= dt;
        }
        self.hit_timer = (self.hit_timer - dt).max(0.0);
        self.upgrades.retain(|_, remaining| {
            *remaining -= dt;
            *remaining > 0.0
        });
        if self.weapon != WeaponKind::Laser {
            self.weapon_timer += dt;
            if self.weapon_timer >= WEAPON_REVERT_SECS {
                self.weapon = WeaponKind::Laser;
                self.weapon_timer = 0.0;
            }
        }
    }

    /// Register an incoming hit. Returns whether it applied; absorbed hits
    /// (invulnerability window, debug toggle, shield) leave state untouched.
    pub fn handle_hit(&mut self) -> bool {
        if self.hit_timer > 0.0 || self.invulnerable || self.shield_active() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.hit_timer = PLAYER_HIT_INVULN_SECS;
        if STRIP_ARSENAL_ON_HIT {
            self.weapon = WeaponKind::Laser;
            self.weapon_timer = 0.0;
            self.upgrades.clear();
        }
        true
    }

    /// Swap to a new weapon, restarting the revert clock.
    pub fn set_weapon(&mut self, weapon: WeaponKind) {
        self.weapon = weapon;
        self.weapon_timer = 0.0;
    }

    /// Install an upgrade, or refresh an active one to its full duration.
    pub fn apply_upgrade(&mut self, kind: UpgradeKind) {
        self.upgrades.insert(kind, upgrade_spec(kind).duration);
    }

    pub fn apply_power_up(&mut self, power_up: PowerUpKind) {
        match power_up {
            PowerUpKind::Weapon(weapon) => self.set_weapon(weapon),
            PowerUpKind::Upgrade(upgrade) => self.apply_upgrade(upgrade),
        }
    }

    pub fn shield_active(&self) -> bool {
        self.upgrades.contains_key(&UpgradeKind::Shield)
    }

    pub fn has_upgrade(&self, kind: UpgradeKind) -> bool {
        self.upgrades.contains_key(&kind)
    }

    /// Combined fire-rate multiplier from active upgrades.
    pub fn fire_rate_mult(&self) -> f64 {
        self.upgrades
            .keys()
            .map(|&kind| upgrade_spec(kind).fire_rate_mult)
            .product()
    }

    /// Ship position on the orbit ring.
    pub fn pos(&self) -> DVec2 {
        polar_to_cartesian(self.angle, PLAYER_ORBIT_RADIUS)
    }
}
