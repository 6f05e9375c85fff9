//! End-of-tick despawning.
//!
//! Drains everything the collision pipeline queued, plus entities that
//! expired or left the field this tick. Double-queued entities are fine:
//! the second despawn is a no-op.

use hecs::{Entity, World};

use gyre_core::components::{Bullet, Enemy, EnemyBullet, Particle, Satellite};
use gyre_core::constants::{BULLET_CULL_RADIUS, INNER_BOUND_RADIUS, OUTER_BOUND_RADIUS};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, bullet) in world.query_mut::<&Bullet>() {
        if bullet.radius <= BULLET_CULL_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    for (entity, bullet) in world.query_mut::<&EnemyBullet>() {
        if bullet.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    // Entering enemies may start outside the bound on their way in.
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.radius >= OUTER_BOUND_RADIUS && !enemy.entering {
            despawn_buffer.push(entity);
        }
    }

    for (entity, satellite) in world.query_mut::<&Satellite>() {
        if satellite.life <= 0.0 || satellite.radius <= INNER_BOUND_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.age >= particle.life {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
