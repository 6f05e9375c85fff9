//! Entity spawning: wave formations, satellites, projectiles, explosions.
//!
//! Free functions over the hecs world. Formation layouts and the explosion
//! particle mix live here so systems stay decision-only.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gyre_core::components::*;
use gyre_core::constants::*;
use gyre_core::enums::*;
use gyre_core::events::AudioEvent;
use gyre_core::weapons::power_up_color;

/// Roll a formation for the given wave number and spawn it.
pub fn spawn_next_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) {
    let roll: f64 = rng.gen();
    if roll < 0.4 {
        spawn_spiral_wave(world, rng, wave);
    } else if roll < 0.8 {
        spawn_vshape_wave(world, rng, wave);
    } else {
        spawn_arc_wave(world, rng, wave);
    }
}

/// Spiral: a double-loop corkscrew of enemies boiling out from the center.
pub fn spawn_spiral_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) {
    let count = (8 + wave).min(24);
    for i in 0..count {
        let angle = (i as f64 / count as f64) * TAU * 2.0;
        let radius = -20.0 - i as f64 * 5.0;
        let target_radius = rng.gen_range(135.0..243.0);
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let angular_speed = rng.gen_range(0.8..1.6) * direction;
        let kind = if rng.gen::<f64>() > 0.7 {
            EnemyKind::Saucer
        } else {
            EnemyKind::Fighter
        };
        spawn_enemy(world, rng, kind, angle, radius, angular_speed, target_radius);
    }
}

/// V formation: mirrored fighter pairs fanning out from a random heading.
pub fn spawn_vshape_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) {
    let count = (4 + wave / 2).min(10);
    let start_angle = rng.gen_range(0.0..TAU);
    for i in 0..count {
        let mirror = if i % 2 == 0 { 1.0 } else { -1.0 };
        let angle = start_angle + i as f64 * 0.2 * mirror;
        spawn_enemy(
            world,
            rng,
            EnemyKind::Fighter,
            angle,
            -20.0,
            0.5 * mirror,
            PLAYER_ORBIT_RADIUS * 0.6,
        );
    }
}

/// Arc: a saucer line sweeping in from outside the field, sharing one spin.
pub fn spawn_arc_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) {
    let count = (5 + wave).min(12);
    let start_angle = rng.gen_range(0.0..TAU);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let angular_speed = rng.gen_range(1.0..2.0) * direction;
    for i in 0..count {
        let angle = start_angle + i as f64 * 0.1;
        let radius = 540.0 + i as f64 * 20.0;
        let target_radius = PLAYER_ORBIT_RADIUS * rng.gen_range(0.4..0.7);
        spawn_enemy(
            world,
            rng,
            EnemyKind::Saucer,
            angle,
            radius,
            angular_speed,
            target_radius,
        );
    }
}

/// Bonus stage ring: twenty fighters in a full circle with fast
/// alternating spin. No ramming in the bonus phase, so they swarm close.
pub fn spawn_bonus_wave(world: &mut World, rng: &mut ChaCha8Rng) {
    for i in 0..20 {
        let angle = (i as f64 / 20.0) * TAU;
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        let angular_speed = rng.gen_range(2.0..3.0) * direction;
        let target_radius = rng.gen_range(90.0..270.0);
        spawn_enemy(
            world,
            rng,
            EnemyKind::Fighter,
            angle,
            -20.0,
            angular_speed,
            target_radius,
        );
    }
}

/// One power-up mini-wave: a carrier flanked by two plain escorts.
pub fn spawn_satellite_wave(world: &mut World, rng: &mut ChaCha8Rng) {
    let center = rng.gen_range(0.0..TAU);
    for i in 0..SATELLITES_PER_WAVE {
        let offset = (i as f64 - 1.0) * SATELLITE_WAVE_SPACING;
        let power_up = if i == 1 { Some(roll_power_up(rng)) } else { None };
        let color = match power_up {
            Some(kind) => power_up_color(kind).to_string(),
            None => "#ffffff".to_string(),
        };
        world.spawn((Satellite {
            angle: center + offset,
            radius: SATELLITE_SPAWN_RADIUS,
            life: SATELLITE_LIFE_SECS,
            power_up,
            color,
        },));
    }
}

/// Roll a random grant. Upgrades are more common than weapon swaps.
fn roll_power_up(rng: &mut ChaCha8Rng) -> PowerUpKind {
    if rng.gen::<f64>() < POWER_UP_UPGRADE_CHANCE {
        match rng.gen_range(0..3) {
            0 => PowerUpKind::Upgrade(UpgradeKind::Shield),
            1 => PowerUpKind::Upgrade(UpgradeKind::RapidFire),
            _ => PowerUpKind::Upgrade(UpgradeKind::TripleShot),
        }
    } else if rng.gen_bool(0.5) {
        PowerUpKind::Weapon(WeaponKind::Plasma)
    } else {
        PowerUpKind::Weapon(WeaponKind::Wave)
    }
}

fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    angle: f64,
    radius: f64,
    angular_speed: f64,
    target_radius: f64,
) {
    let (health, points) = match kind {
        EnemyKind::Fighter => (FIGHTER_HEALTH, FIGHTER_POINTS),
        EnemyKind::Saucer => (SAUCER_HEALTH, SAUCER_POINTS),
    };
    let color = ENEMY_COLORS[rng.gen_range(0..ENEMY_COLORS.len())].to_string();
    world.spawn((Enemy {
        kind,
        angle,
        radius,
        angular_speed,
        target_radius,
        enter_speed: rng.gen_range(ENEMY_ENTER_SPEED_MIN..ENEMY_ENTER_SPEED_MAX),
        entering: true,
        loop_amplitude: rng.gen_range(ENEMY_LOOP_AMPLITUDE_MIN..ENEMY_LOOP_AMPLITUDE_MAX),
        loop_frequency: rng.gen_range(ENEMY_LOOP_FREQUENCY_MIN..ENEMY_LOOP_FREQUENCY_MAX),
        loop_phase: rng.gen_range(0.0..TAU),
        time: 0.0,
        health,
        points,
        fire_timer: rng.gen_range(ENEMY_FIRST_SHOT_MIN..ENEMY_FIRST_SHOT_MAX),
        color,
    },));
}

/// Aim a bullet from `origin` at a position snapshot of the target.
pub fn spawn_enemy_bullet(world: &mut World, origin: DVec2, target: DVec2) {
    let vel = (target - origin).normalize_or_zero() * ENEMY_BULLET_SPEED;
    world.spawn((EnemyBullet {
        pos: origin,
        vel,
        life: ENEMY_BULLET_LIFE_SECS,
    },));
}

/// Burst `count` particles at `pos`: colored debris, then white sparks,
/// then smoke. Emits the matching explosion event, keyed by burst size.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<AudioEvent>,
    pos: DVec2,
    color: &str,
    count: u32,
) {
    let normal_cutoff = count as f64 * EXPLOSION_NORMAL_FRACTION;
    let spark_cutoff = normal_cutoff + count as f64 * EXPLOSION_SPARK_FRACTION;
    for i in 0..count {
        let (kind, tint) = if (i as f64) < normal_cutoff {
            (ParticleKind::Normal, color)
        } else if (i as f64) < spark_cutoff {
            (ParticleKind::Spark, "#ffffff")
        } else {
            (ParticleKind::Smoke, "#666666")
        };
        spawn_particle(world, rng, kind, pos, tint);
    }
    let event = if count >= BIG_EXPLOSION_PARTICLES {
        AudioEvent::BigExplosion {
            x: pos.x,
            y: pos.y,
            color: color.to_string(),
            count,
        }
    } else {
        AudioEvent::Explosion {
            x: pos.x,
            y: pos.y,
            color: color.to_string(),
            count,
        }
    };
    events.push(event);
}

fn spawn_particle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: ParticleKind,
    pos: DVec2,
    color: &str,
) {
    let vel = DVec2::new(rng.gen_range(-150.0..150.0), rng.gen_range(-150.0..150.0));
    let life = rng.gen_range(0.4..0.8);
    let size = rng.gen_range(2.0..6.0);
    let (vel, life, size) = match kind {
        ParticleKind::Normal => (vel, life, size),
        ParticleKind::Spark => (vel * 2.0, life * 0.5, size * 0.5),
        ParticleKind::Smoke => (vel * 0.3, life * 2.0, size * 1.5),
    };
    world.spawn((Particle {
        kind,
        pos,
        vel,
        age: 0.0,
        life,
        rotation: rng.gen_range(0.0..TAU),
        rot_speed: rng.gen_range(-5.0..5.0),
        size,
        color: color.to_string(),
    },));
}
