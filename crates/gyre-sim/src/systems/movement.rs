//! Kinematics for every projectile, enemy, satellite, and particle.
//!
//! Pure motion: nothing here spawns, despawns, or scores.

use hecs::World;

use gyre_core::components::{Bullet, Enemy, EnemyBullet, Particle, Satellite};
use gyre_core::constants::SATELLITE_SPEED;
use gyre_core::enums::ParticleKind;
use gyre_core::types::wrap_angle;

pub fn run(world: &mut World, dt: f64) {
    for (_, bullet) in world.query_mut::<&mut Bullet>() {
        bullet.radius -= bullet.speed * dt;
    }

    for (_, bullet) in world.query_mut::<&mut EnemyBullet>() {
        let vel = bullet.vel;
        bullet.pos += vel * dt;
        bullet.life -= dt;
    }

    for (_, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.time += dt;
        enemy.angle = wrap_angle(enemy.angle + enemy.angular_speed * dt);
        if enemy.entering {
            enemy.radius += enemy.enter_speed * dt;
            if enemy.radius >= enemy.target_radius {
                enemy.radius = enemy.target_radius;
                enemy.entering = false;
            }
        } else {
            // Hover: the radius is driven, not integrated, so the loop
            // stays centered on target_radius no matter the frame pacing.
            enemy.radius = enemy.target_radius
                + (enemy.time * enemy.loop_frequency + enemy.loop_phase).sin()
                    * enemy.loop_amplitude;
        }
    }

    for (_, satellite) in world.query_mut::<&mut Satellite>() {
        satellite.radius += SATELLITE_SPEED * dt;
        satellite.life -= dt;
    }

    for (_, particle) in world.query_mut::<&mut Particle>() {
        particle.age += dt;
        let vel = particle.vel;
        particle.pos += vel * dt;
        particle.rotation += particle.rot_speed * dt;
        match particle.kind {
            ParticleKind::Normal => particle.vel *= 0.98,
            ParticleKind::Spark => particle.vel *= 0.95,
            ParticleKind::Smoke => {
                particle.vel.y -= 20.0 * dt;
                particle.vel.x *= 0.99;
            }
        }
    }
}
