//! Enemy fire control.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gyre_core::components::Enemy;
use gyre_core::constants::{ENEMY_RESHOT_MAX, ENEMY_RESHOT_MIN};
use gyre_core::enums::GamePhase;
use gyre_core::types::polar_to_cartesian;

use crate::world_setup;

/// Tick enemy fire timers and loose shots at the player's current
/// position. Enemies hold fire outside normal wave combat.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, phase: GamePhase, player_pos: DVec2, dt: f64) {
    if phase != GamePhase::Playing {
        return;
    }

    let mut origins: Vec<DVec2> = Vec::new();
    for (_, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.fire_timer -= dt;
        if enemy.fire_timer <= 0.0 {
            origins.push(polar_to_cartesian(enemy.angle, enemy.radius));
            enemy.fire_timer = rng.gen_range(ENEMY_RESHOT_MIN..ENEMY_RESHOT_MAX);
        }
    }
    for origin in origins {
        world_setup::spawn_enemy_bullet(world, origin, player_pos);
    }
}
