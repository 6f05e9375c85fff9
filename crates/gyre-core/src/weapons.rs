//! Weapon and upgrade definition tables.
//!
//! Consolidates per-kind tuning so entities hold only a kind tag and look
//! the rest up here.

use crate::enums::{PowerUpKind, UpgradeKind, WeaponKind};

/// Tuning for one player weapon.
pub struct WeaponSpec {
    /// Bullet color.
    pub color: &'static str,
    /// Damage per bullet.
    pub damage: u32,
    /// Seconds between shots at base fire rate.
    pub cooldown: f64,
    /// Bullet radial speed (world units/s).
    pub speed: f64,
    /// Bullet visual size.
    pub size: f64,
    /// Fan spread for weapons that always fire three bullets (radians).
    pub spread: Option<f64>,
}

/// Get the definition for a weapon.
pub fn weapon_spec(kind: WeaponKind) -> WeaponSpec {
    match kind {
        WeaponKind::Laser => WeaponSpec {
            color: "#ffd966",
            damage: 1,
            cooldown: 0.12,
            speed: 600.0,
            size: 3.0,
            spread: None,
        },
        WeaponKind::Plasma => WeaponSpec {
            color: "#66ffcc",
            damage: 2,
            cooldown: 0.2,
            speed: 500.0,
            size: 5.0,
            spread: None,
        },
        WeaponKind::Wave => WeaponSpec {
            color: "#ff66aa",
            damage: 1,
            cooldown: 0.15,
            speed: 550.0,
            size: 4.0,
            spread: Some(0.2),
        },
    }
}

/// Tuning for one timed upgrade.
pub struct UpgradeSpec {
    /// Seconds the upgrade stays active.
    pub duration: f64,
    /// Pickup color.
    pub color: &'static str,
    /// Fire-rate multiplier while active.
    pub fire_rate_mult: f64,
}

/// Get the definition for an upgrade.
pub fn upgrade_spec(kind: UpgradeKind) -> UpgradeSpec {
    match kind {
        UpgradeKind::Shield => UpgradeSpec {
            duration: 10.0,
            color: "#66aaff",
            fire_rate_mult: 1.0,
        },
        UpgradeKind::RapidFire => UpgradeSpec {
            duration: 15.0,
            color: "#ffff00",
            fire_rate_mult: 2.0,
        },
        UpgradeKind::TripleShot => UpgradeSpec {
            duration: 20.0,
            color: "#ffff00",
            fire_rate_mult: 1.0,
        },
    }
}

/// Pickup color for a power-up grant.
pub fn power_up_color(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Weapon(weapon) => weapon_spec(weapon).color,
        PowerUpKind::Upgrade(upgrade) => upgrade_spec(upgrade).color,
    }
}
