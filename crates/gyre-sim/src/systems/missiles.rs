//! Missile flight and area detonation.

use glam::DVec2;
use hecs::{Entity, World};

use gyre_core::components::{Enemy, Missile, Satellite};
use gyre_core::constants::{
    MISSILE_BLAST_RADIUS, MISSILE_DETONATE_RADIUS, MISSILE_SPEED, SATELLITE_POINTS,
};
use gyre_core::enums::{GamePhase, PowerUpKind};
use gyre_core::events::AudioEvent;
use gyre_core::types::{dist_sq, polar_to_cartesian};
use rand_chacha::ChaCha8Rng;

use crate::player::PlayerState;
use crate::session::SessionState;
use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    player: &mut PlayerState,
    phase: GamePhase,
    dt: f64,
    events: &mut Vec<AudioEvent>,
) {
    let mut detonations: Vec<(Entity, DVec2)> = Vec::new();
    for (entity, missile) in world.query_mut::<&mut Missile>() {
        missile.radius += MISSILE_SPEED * dt;
        if missile.radius <= MISSILE_DETONATE_RADIUS {
            detonations.push((entity, polar_to_cartesian(missile.angle, missile.radius)));
        }
    }

    for (entity, pos) in detonations {
        let _ = world.despawn(entity);
        detonate(world, rng, session, player, phase, pos, events);
    }
}

/// Burst at `pos` and damage everything inside the blast radius.
/// Outside combat phases the blast is visual only.
fn detonate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    player: &mut PlayerState,
    phase: GamePhase,
    pos: DVec2,
    events: &mut Vec<AudioEvent>,
) {
    world_setup::spawn_explosion(world, rng, events, pos, "#ffffaa", 50);
    if !matches!(phase, GamePhase::Playing | GamePhase::Bonus | GamePhase::Boss) {
        return;
    }
    let blast_sq = MISSILE_BLAST_RADIUS * MISSILE_BLAST_RADIUS;

    let mut killed: Vec<(Entity, DVec2, String, u32)> = Vec::new();
    for (entity, enemy) in world.query_mut::<&mut Enemy>() {
        let enemy_pos = polar_to_cartesian(enemy.angle, enemy.radius);
        if dist_sq(pos, enemy_pos) <= blast_sq {
            enemy.health = enemy.health.saturating_sub(1);
            if enemy.health == 0 {
                killed.push((entity, enemy_pos, enemy.color.clone(), enemy.points));
            }
        }
    }
    for (entity, enemy_pos, color, points) in killed {
        let _ = world.despawn(entity);
        session.score += points;
        world_setup::spawn_explosion(world, rng, events, enemy_pos, &color, 15);
    }

    let mut caught: Vec<(Entity, DVec2, Option<PowerUpKind>)> = Vec::new();
    for (entity, satellite) in world.query_mut::<&Satellite>() {
        let sat_pos = polar_to_cartesian(satellite.angle, satellite.radius);
        if dist_sq(pos, sat_pos) <= blast_sq {
            caught.push((entity, sat_pos, satellite.power_up));
        }
    }
    for (entity, sat_pos, power_up) in caught {
        let _ = world.despawn(entity);
        session.score += SATELLITE_POINTS;
        session.destroyed_count += 1;
        let color = match power_up {
            Some(grant) => {
                player.apply_power_up(grant);
                events.push(AudioEvent::PowerUp);
                "#ffff00"
            }
            None => "#ffffff",
        };
        world_setup::spawn_explosion(world, rng, events, sat_pos, color, 20);
    }
}
