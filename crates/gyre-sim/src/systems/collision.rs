//! The collision pipeline, run once per tick in a fixed order:
//! enemy bullets against the player, enemy hulls against the player,
//! then player bullets against enemies, satellites, and the boss.
//!
//! Removals are deferred into the despawn buffer; a per-tick removed
//! list keeps a claimed entity from matching twice before cleanup runs.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use gyre_boss_ai::behavior::BossState;
use gyre_core::components::{Bullet, Enemy, EnemyBullet, Satellite};
use gyre_core::constants::{
    ENEMY_KILL_RADIUS, PLAYER_BULLET_HITBOX, PLAYER_RAM_HITBOX, SATELLITE_KILL_RADIUS,
    SATELLITE_POINTS,
};
use gyre_core::enums::{GamePhase, PowerUpKind};
use gyre_core::events::AudioEvent;
use gyre_core::types::{dist_sq, polar_to_cartesian};

use crate::player::PlayerState;
use crate::session::SessionState;
use crate::systems::boss_control;
use crate::world_setup;

/// Returns true when a hit connected with the player's last life.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    player: &mut PlayerState,
    boss: &mut Option<BossState>,
    phase: GamePhase,
    events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    if !matches!(phase, GamePhase::Playing | GamePhase::Bonus | GamePhase::Boss) {
        return false;
    }

    let mut removed: Vec<Entity> = Vec::new();
    let mut player_died = false;

    // Enemy bullets against the player. At most one hit lands per tick;
    // during the invulnerability window bullets pass through unconsumed.
    if player.hit_timer <= 0.0 {
        let player_pos = player.pos();
        let hitbox_sq = PLAYER_BULLET_HITBOX * PLAYER_BULLET_HITBOX;
        let mut incoming: Option<Entity> = None;
        for (entity, bullet) in world.query_mut::<&EnemyBullet>() {
            if dist_sq(bullet.pos, player_pos) < hitbox_sq {
                incoming = Some(entity);
                break;
            }
        }
        if let Some(entity) = incoming {
            removed.push(entity);
            despawn_buffer.push(entity);
            if player.handle_hit() {
                events.push(AudioEvent::Hit);
                if player.lives == 0 {
                    player_died = true;
                }
            }
        }
    }

    // Enemy hulls ramming the player. The bonus stage has no ramming.
    if player.hit_timer <= 0.0 && phase != GamePhase::Bonus {
        let player_pos = player.pos();
        let hitbox_sq = PLAYER_RAM_HITBOX * PLAYER_RAM_HITBOX;
        let mut rammed: Vec<(Entity, DVec2, String)> = Vec::new();
        for (entity, enemy) in world.query_mut::<&Enemy>() {
            let enemy_pos = polar_to_cartesian(enemy.angle, enemy.radius);
            if dist_sq(enemy_pos, player_pos) < hitbox_sq {
                rammed.push((entity, enemy_pos, enemy.color.clone()));
            }
        }
        for (entity, enemy_pos, color) in rammed {
            removed.push(entity);
            despawn_buffer.push(entity);
            world_setup::spawn_explosion(world, rng, events, enemy_pos, &color, 20);
            if player.handle_hit() {
                events.push(AudioEvent::Hit);
                if player.lives == 0 {
                    player_died = true;
                }
            }
        }
    }

    // Player bullets, newest first. Each stops at its first hit:
    // enemies, then satellites, then the boss.
    let mut bullets: Vec<(Entity, DVec2, u32)> = world
        .query_mut::<&Bullet>()
        .into_iter()
        .map(|(entity, bullet)| {
            let pos = polar_to_cartesian(bullet.angle, bullet.radius);
            (entity, pos, bullet.damage)
        })
        .collect();
    bullets.sort_by(|a, b| b.0.id().cmp(&a.0.id()));

    for (bullet_entity, bullet_pos, damage) in bullets {
        if hit_enemy(
            world,
            rng,
            session,
            events,
            &mut removed,
            despawn_buffer,
            bullet_pos,
        ) {
            despawn_buffer.push(bullet_entity);
            continue;
        }
        if hit_satellite(
            world,
            rng,
            session,
            player,
            events,
            &mut removed,
            despawn_buffer,
            bullet_pos,
        ) {
            despawn_buffer.push(bullet_entity);
            continue;
        }
        if let Some(boss_state) = boss.as_mut() {
            if let Some(index) = boss_state.check_bullet_collision(bullet_pos) {
                let tick = boss_state.take_damage(index, damage);
                boss_control::apply_boss_tick(world, rng, session, events, tick);
                events.push(AudioEvent::Hit);
                despawn_buffer.push(bullet_entity);
            }
        }
    }

    player_died
}

/// Resolve one bullet against enemy hulls. Returns whether it connected.
fn hit_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    events: &mut Vec<AudioEvent>,
    removed: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    bullet_pos: DVec2,
) -> bool {
    let kill_sq = ENEMY_KILL_RADIUS * ENEMY_KILL_RADIUS;
    let mut connected = false;
    let mut killed: Option<(Entity, DVec2, String, u32)> = None;
    for (entity, enemy) in world.query_mut::<&mut Enemy>() {
        if removed.contains(&entity) {
            continue;
        }
        let enemy_pos = polar_to_cartesian(enemy.angle, enemy.radius);
        if dist_sq(bullet_pos, enemy_pos) < kill_sq {
            enemy.health = enemy.health.saturating_sub(1);
            if enemy.health == 0 {
                killed = Some((entity, enemy_pos, enemy.color.clone(), enemy.points));
            }
            connected = true;
            break;
        }
    }
    if let Some((entity, enemy_pos, color, points)) = killed {
        session.score += points;
        removed.push(entity);
        despawn_buffer.push(entity);
        world_setup::spawn_explosion(world, rng, events, enemy_pos, &color, 15);
    } else if connected {
        events.push(AudioEvent::Hit);
    }
    connected
}

/// Resolve one bullet against satellites. Returns whether it connected.
#[allow(clippy::too_many_arguments)]
fn hit_satellite(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    player: &mut PlayerState,
    events: &mut Vec<AudioEvent>,
    removed: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    bullet_pos: DVec2,
) -> bool {
    let kill_sq = SATELLITE_KILL_RADIUS * SATELLITE_KILL_RADIUS;
    let mut caught: Option<(Entity, DVec2, String, Option<PowerUpKind>)> = None;
    for (entity, satellite) in world.query_mut::<&Satellite>() {
        if removed.contains(&entity) {
            continue;
        }
        let sat_pos = polar_to_cartesian(satellite.angle, satellite.radius);
        if dist_sq(bullet_pos, sat_pos) < kill_sq {
            caught = Some((entity, sat_pos, satellite.color.clone(), satellite.power_up));
            break;
        }
    }
    let Some((entity, sat_pos, color, power_up)) = caught else {
        return false;
    };
    session.score += SATELLITE_POINTS;
    session.destroyed_count += 1;
    if let Some(grant) = power_up {
        player.apply_power_up(grant);
        events.push(AudioEvent::PowerUp);
    }
    removed.push(entity);
    despawn_buffer.push(entity);
    world_setup::spawn_explosion(world, rng, events, sat_pos, &color, 25);
    true
}
