//! Player steering, timers, and held-trigger firing.

use hecs::World;

use gyre_core::commands::InputState;
use gyre_core::components::Bullet;
use gyre_core::constants::{
    BULLET_SPAWN_OFFSET, PLAYER_ANGULAR_SPEED, PLAYER_ORBIT_RADIUS, TRIPLE_SHOT_SPREAD,
};
use gyre_core::enums::{GamePhase, Steer, UpgradeKind, WeaponKind};
use gyre_core::events::AudioEvent;
use gyre_core::types::{angle_delta, wrap_angle};
use gyre_core::weapons::weapon_spec;

use crate::player::PlayerState;

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    phase: GamePhase,
    input: &InputState,
    dt: f64,
    events: &mut Vec<AudioEvent>,
) {
    let max_step = PLAYER_ANGULAR_SPEED * dt;
    if let Some(target) = input.pointer_angle {
        // Turn toward the pointer along the shorter arc.
        let delta = angle_delta(player.angle, target);
        player.angle = wrap_angle(player.angle + delta.clamp(-max_step, max_step));
    } else {
        match input.steer {
            Steer::Left => player.angle = wrap_angle(player.angle - max_step),
            Steer::Right => player.angle = wrap_angle(player.angle + max_step),
            Steer::None => {}
        }
    }

    player.update_timers(dt);

    let combat = matches!(phase, GamePhase::Playing | GamePhase::Bonus | GamePhase::Boss);
    if combat && input.fire_held && player.fire_timer <= 0.0 {
        fire(world, player, events);
    }
}

/// Spawn this trigger pull's bullets and start the cooldown.
fn fire(world: &mut World, player: &mut PlayerState, events: &mut Vec<AudioEvent>) {
    let spec = weapon_spec(player.weapon);
    events.push(match player.weapon {
        WeaponKind::Laser => AudioEvent::Laser,
        WeaponKind::Plasma => AudioEvent::Plasma,
        WeaponKind::Wave => AudioEvent::Wave,
    });
    player.fire_timer = spec.cooldown / player.fire_rate_mult();

    let radius = PLAYER_ORBIT_RADIUS - BULLET_SPAWN_OFFSET;
    let fan = spec.spread.is_some() || player.has_upgrade(UpgradeKind::TripleShot);
    if fan {
        let spread = spec.spread.unwrap_or(TRIPLE_SHOT_SPREAD);
        for i in -1..=1 {
            world.spawn((Bullet {
                angle: wrap_angle(player.angle + i as f64 * spread),
                radius,
                speed: spec.speed,
                damage: spec.damage,
                weapon: player.weapon,
            },));
        }
    } else {
        world.spawn((Bullet {
            angle: player.angle,
            radius,
            speed: spec.speed,
            damage: spec.damage,
            weapon: player.weapon,
        },));
    }
}
