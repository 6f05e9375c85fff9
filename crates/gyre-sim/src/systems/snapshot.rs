//! Snapshot construction: the complete per-tick view for the frontend.
//!
//! Entity views are sorted by id so equal simulations serialize
//! identically regardless of archetype iteration order.

use hecs::World;

use gyre_boss_ai::behavior::BossState;
use gyre_core::components::{Bullet, Enemy, EnemyBullet, Missile, Particle, Satellite};
use gyre_core::constants::PLANETS;
use gyre_core::enums::GamePhase;
use gyre_core::events::AudioEvent;
use gyre_core::state::{
    BossView, BulletView, EnemyBulletView, EnemyView, GameSnapshot, MissileView, ParticleView,
    PlayerView, SatelliteView, UpgradeView,
};
use gyre_core::types::{polar_to_cartesian, SimTime};

use crate::player::PlayerState;
use crate::session::SessionState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &SessionState,
    player: &PlayerState,
    boss: &Option<BossState>,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        score: session.score,
        wave: session.wave,
        planet_index: session.planet_index,
        planet_name: PLANETS[session.planet_index].to_string(),
        warps_to_planet: session.warps_to_planet,
        world_time: session.world_time,
        game_over_timer: session.game_over_timer,
        player: build_player_view(player),
        bullets: build_bullet_views(world),
        missiles: build_missile_views(world),
        enemy_bullets: build_enemy_bullet_views(world),
        enemies: build_enemy_views(world),
        satellites: build_satellite_views(world),
        particles: build_particle_views(world),
        boss: boss.as_ref().map(build_boss_view),
        audio_events,
    }
}

fn build_player_view(player: &PlayerState) -> PlayerView {
    let pos = player.pos();
    let upgrades = player
        .upgrades
        .iter()
        .map(|(&kind, &remaining_secs)| UpgradeView {
            kind,
            remaining_secs,
        })
        .collect();
    PlayerView {
        angle: player.angle,
        x: pos.x,
        y: pos.y,
        lives: player.lives,
        hit_timer: player.hit_timer,
        weapon: player.weapon,
        shield_active: player.shield_active(),
        upgrades,
        invulnerable: player.invulnerable,
    }
}

fn build_bullet_views(world: &World) -> Vec<BulletView> {
    let mut views: Vec<BulletView> = world
        .query::<&Bullet>()
        .iter()
        .map(|(entity, bullet)| {
            let pos = polar_to_cartesian(bullet.angle, bullet.radius);
            BulletView {
                id: entity.id(),
                angle: bullet.angle,
                radius: bullet.radius,
                x: pos.x,
                y: pos.y,
                weapon: bullet.weapon,
            }
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_missile_views(world: &World) -> Vec<MissileView> {
    let mut views: Vec<MissileView> = world
        .query::<&Missile>()
        .iter()
        .map(|(entity, missile)| {
            let pos = polar_to_cartesian(missile.angle, missile.radius);
            MissileView {
                id: entity.id(),
                angle: missile.angle,
                radius: missile.radius,
                x: pos.x,
                y: pos.y,
            }
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_enemy_bullet_views(world: &World) -> Vec<EnemyBulletView> {
    let mut views: Vec<EnemyBulletView> = world
        .query::<&EnemyBullet>()
        .iter()
        .map(|(entity, bullet)| EnemyBulletView {
            id: entity.id(),
            x: bullet.pos.x,
            y: bullet.pos.y,
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_enemy_views(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| {
            let pos = polar_to_cartesian(enemy.angle, enemy.radius);
            EnemyView {
                id: entity.id(),
                kind: enemy.kind,
                angle: enemy.angle,
                radius: enemy.radius,
                x: pos.x,
                y: pos.y,
                health: enemy.health,
                entering: enemy.entering,
                color: enemy.color.clone(),
            }
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_satellite_views(world: &World) -> Vec<SatelliteView> {
    let mut views: Vec<SatelliteView> = world
        .query::<&Satellite>()
        .iter()
        .map(|(entity, satellite)| {
            let pos = polar_to_cartesian(satellite.angle, satellite.radius);
            SatelliteView {
                id: entity.id(),
                angle: satellite.angle,
                radius: satellite.radius,
                x: pos.x,
                y: pos.y,
                life: satellite.life,
                power_up: satellite.power_up,
                color: satellite.color.clone(),
            }
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_particle_views(world: &World) -> Vec<ParticleView> {
    let mut views: Vec<ParticleView> = world
        .query::<&Particle>()
        .iter()
        .map(|(entity, particle)| ParticleView {
            id: entity.id(),
            kind: particle.kind,
            x: particle.pos.x,
            y: particle.pos.y,
            rotation: particle.rotation,
            size: particle.size,
            alpha: (1.0 - particle.age / particle.life).max(0.0),
            color: particle.color.clone(),
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

fn build_boss_view(boss: &BossState) -> BossView {
    let shake = boss.shake_offset();
    BossView {
        kind: boss.kind(),
        health_ratio: boss.health_ratio(),
        is_destroying: boss.is_destroying(),
        death_timer: boss.death_timer(),
        shake_x: shake.x,
        shake_y: shake.y,
        sub_targets: boss.sub_targets(),
    }
}
