//! Tests for the simulation engine, wave pacing, the collision pipeline,
//! and stage progression.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gyre_core::commands::{InputState, PlayerCommand};
use gyre_core::components::{Enemy, EnemyBullet, Particle, Satellite};
use gyre_core::constants::*;
use gyre_core::enums::*;
use gyre_core::events::AudioEvent;
use gyre_core::state::GameSnapshot;
use gyre_core::types::{polar_to_cartesian, wrap_angle};

use crate::engine::{SimConfig, SimulationEngine};
use crate::systems::movement;
use crate::world_setup;

fn idle() -> InputState {
    InputState::default()
}

fn firing() -> InputState {
    InputState {
        fire_held: true,
        ..Default::default()
    }
}

fn new_engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    })
}

/// Engine with `Start` already processed: playing, wave 1 on the field.
fn started_engine(seed: u64) -> SimulationEngine {
    let mut engine = new_engine(seed);
    engine.queue_command(PlayerCommand::Start);
    engine.tick(&idle());
    engine
}

fn run_ticks(engine: &mut SimulationEngine, input: &InputState, count: u32) -> GameSnapshot {
    let mut snap = engine.tick(input);
    for _ in 1..count {
        snap = engine.tick(input);
    }
    snap
}

/// Despawn every enemy and satellite so the field reads as cleared.
fn clear_field(engine: &mut SimulationEngine) {
    let world = engine.world_mut();
    let mut doomed: Vec<Entity> = world
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    doomed.extend(
        world
            .query_mut::<&Satellite>()
            .into_iter()
            .map(|(entity, _)| entity),
    );
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}

/// A stationary enemy parked at the given polar position: no spin, no
/// hover, and a fire timer too long to matter.
fn spawn_test_enemy(engine: &mut SimulationEngine, angle: f64, radius: f64) -> Entity {
    engine.world_mut().spawn((Enemy {
        kind: EnemyKind::Fighter,
        angle,
        radius,
        angular_speed: 0.0,
        target_radius: radius,
        enter_speed: 150.0,
        entering: false,
        loop_amplitude: 0.0,
        loop_frequency: 1.0,
        loop_phase: 0.0,
        time: 0.0,
        health: 1,
        points: FIGHTER_POINTS,
        fire_timer: 1000.0,
        color: "#24d8ff".to_string(),
    },))
}

fn spawn_enemy_bullet_at(engine: &mut SimulationEngine, pos: DVec2) {
    engine.world_mut().spawn((EnemyBullet {
        pos,
        vel: DVec2::ZERO,
        life: 1.0,
    },));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = new_engine(7);
    let mut engine_b = new_engine(7);
    engine_a.queue_command(PlayerCommand::Start);
    engine_b.queue_command(PlayerCommand::Start);

    for tick in 0..300 {
        let input = if tick % 3 == 0 { firing() } else { idle() };
        let snap_a = engine_a.tick(&input);
        let snap_b = engine_b.tick(&input);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = new_engine(7);
    let mut engine_b = new_engine(8);
    engine_a.queue_command(PlayerCommand::Start);
    engine_b.queue_command(PlayerCommand::Start);

    let mut diverged = false;
    for _ in 0..300 {
        let snap_a = engine_a.tick(&idle());
        let snap_b = engine_b.tick(&idle());
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Attract mode and session start ----

#[test]
fn test_attract_mode_is_inert() {
    let mut engine = new_engine(42);
    engine.queue_command(PlayerCommand::FireMissile);
    let snap = run_ticks(&mut engine, &firing(), 100);
    assert_eq!(snap.phase, GamePhase::Attract);
    assert!(snap.bullets.is_empty(), "No firing before the run starts");
    assert!(snap.missiles.is_empty(), "Missiles are blocked outside combat");
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.score, 0);
    assert!(snap.world_time > 1.0, "World time still advances in attract");
}

#[test]
fn test_start_command_begins_run() {
    let mut engine = started_engine(42);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.player.lives, PLAYER_START_LIVES);
    assert_eq!(snap.planet_name, "Neptune");
    assert_eq!(snap.warps_to_planet, WARPS_PER_PLANET);
    assert!(!snap.enemies.is_empty(), "The first wave spawns immediately");
}

#[test]
fn test_start_ignored_while_playing() {
    let mut engine = started_engine(42);
    engine.session_mut().score = 500;
    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 500, "A mid-run start must not reset the session");
}

// ---- Steering ----

#[test]
fn test_steering_advances_and_wraps() {
    let mut engine = started_engine(42);
    let right = InputState {
        steer: Steer::Right,
        ..Default::default()
    };
    let mut snap = engine.tick(&right);
    for _ in 1..30 {
        snap = engine.tick(&right);
        assert!(snap.player.angle >= 0.0 && snap.player.angle < TAU);
    }
    let expected = wrap_angle(PLAYER_RESET_ANGLE + PLAYER_ANGULAR_SPEED * 30.0 * DT);
    assert!((snap.player.angle - expected).abs() < 1e-9);
}

#[test]
fn test_pointer_steering_overrides_keys() {
    let mut engine = started_engine(42);
    let input = InputState {
        steer: Steer::Left,
        fire_held: false,
        pointer_angle: Some(1.0),
    };
    let snap = run_ticks(&mut engine, &input, 120);
    assert!(
        (snap.player.angle - 1.0).abs() < 1e-6,
        "The pointer target wins over held keys"
    );
}

// ---- Firing ----

#[test]
fn test_fire_cooldown_gates_shots() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);

    let snap = engine.tick(&firing());
    assert_eq!(snap.bullets.len(), 1, "One shot on the first trigger tick");
    assert!(snap
        .audio_events
        .iter()
        .any(|e| matches!(e, AudioEvent::Laser)));

    for _ in 0..6 {
        let snap = engine.tick(&firing());
        assert_eq!(snap.bullets.len(), 1, "The cooldown holds the next shot");
    }
    let snap = run_ticks(&mut engine, &firing(), 2);
    assert_eq!(snap.bullets.len(), 2, "Second shot once the cooldown lapses");
}

#[test]
fn test_triple_shot_fans_three() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.player_mut().apply_upgrade(UpgradeKind::TripleShot);

    let snap = engine.tick(&firing());
    assert_eq!(snap.bullets.len(), 3);
    let mut angles: Vec<f64> = snap.bullets.iter().map(|b| b.angle).collect();
    angles.sort_by(f64::total_cmp);
    assert!((angles[2] - angles[0] - 2.0 * TRIPLE_SHOT_SPREAD).abs() < 1e-9);
}

#[test]
fn test_wave_weapon_fires_spread() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.player_mut().set_weapon(WeaponKind::Wave);

    let snap = engine.tick(&firing());
    assert_eq!(snap.bullets.len(), 3, "The wave weapon fires a fan");
    assert!(snap.bullets.iter().all(|b| b.weapon == WeaponKind::Wave));
}

#[test]
fn test_weapon_reverts_to_laser() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);
    engine.player_mut().set_weapon(WeaponKind::Plasma);

    let snap = engine.tick(&idle());
    assert_eq!(snap.player.weapon, WeaponKind::Plasma);
    let snap = run_ticks(&mut engine, &idle(), 300);
    assert_eq!(
        snap.player.weapon,
        WeaponKind::Plasma,
        "The swap holds well before the revert window"
    );
    let snap = run_ticks(&mut engine, &idle(), 620);
    assert_eq!(
        snap.player.weapon,
        WeaponKind::Laser,
        "The weapon reverts to the base weapon after its window"
    );
}

// ---- Missiles ----

#[test]
fn test_missile_cooldown_single_launch() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::FireMissile);
    engine.queue_command(PlayerCommand::FireMissile);
    let snap = engine.tick(&idle());
    assert_eq!(snap.missiles.len(), 1, "The second launch is inside the cooldown");
}

#[test]
fn test_missile_blast_radius() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    spawn_test_enemy(&mut engine, -FRAC_PI_2, 40.0);
    spawn_test_enemy(&mut engine, -FRAC_PI_2, 150.0);

    engine.queue_command(PlayerCommand::FireMissile);
    let snap = run_ticks(&mut engine, &idle(), 95);
    assert_eq!(snap.missiles.len(), 0, "The missile detonates at the hub");
    assert_eq!(
        snap.enemies.len(),
        1,
        "Only the enemy outside the blast radius survives"
    );
    assert_eq!(snap.score, FIGHTER_POINTS);
}

// ---- Collisions and damage ----

#[test]
fn test_bullet_kill_scores_and_explodes() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    spawn_test_enemy(&mut engine, -FRAC_PI_2, 300.0);

    let mut snap = engine.tick(&firing());
    for _ in 0..8 {
        if snap.enemies.is_empty() {
            break;
        }
        snap = engine.tick(&idle());
    }
    assert!(snap.enemies.is_empty(), "The enemy should be destroyed");
    assert_eq!(snap.score, FIGHTER_POINTS);
    assert!(!snap.particles.is_empty(), "A kill leaves an explosion behind");
}

#[test]
fn test_enemy_bullet_hit_costs_life() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.player_mut().hit_timer = 0.0;
    engine.player_mut().set_weapon(WeaponKind::Plasma);
    engine.player_mut().apply_upgrade(UpgradeKind::RapidFire);
    spawn_enemy_bullet_at(
        &mut engine,
        polar_to_cartesian(-FRAC_PI_2, PLAYER_ORBIT_RADIUS),
    );

    let snap = engine.tick(&idle());
    assert_eq!(snap.player.lives, PLAYER_START_LIVES - 1);
    assert!(snap.player.hit_timer > 2.0, "A hit grants an invulnerability window");
    assert_eq!(
        snap.player.weapon,
        WeaponKind::Laser,
        "A hit strips the weapon back to the base laser"
    );
    assert!(snap.player.upgrades.is_empty(), "A hit strips active upgrades");
    assert!(snap.enemy_bullets.is_empty(), "The bullet is consumed");
    assert!(snap.audio_events.iter().any(|e| matches!(e, AudioEvent::Hit)));
}

#[test]
fn test_game_over_on_last_life() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);

    for _ in 0..PLAYER_START_LIVES - 1 {
        engine.player_mut().hit_timer = 0.0;
        spawn_enemy_bullet_at(
            &mut engine,
            polar_to_cartesian(-FRAC_PI_2, PLAYER_ORBIT_RADIUS),
        );
        engine.tick(&idle());
    }
    assert_eq!(engine.player().lives, 1);

    spawn_test_enemy(&mut engine, 0.0, 250.0);
    engine.player_mut().hit_timer = 0.0;
    spawn_enemy_bullet_at(
        &mut engine,
        polar_to_cartesian(-FRAC_PI_2, PLAYER_ORBIT_RADIUS),
    );
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.player.lives, 0);
    assert!(snap.enemies.is_empty(), "Combat entities sweep on game over");
    assert!(
        snap.audio_events
            .iter()
            .any(|e| matches!(e, AudioEvent::Explosion { count: 50, .. })),
        "The ship bursts on the game-over tick"
    );

    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.player.lives, PLAYER_START_LIVES);
    assert_eq!(snap.score, 0);
}

#[test]
fn test_shield_absorbs_hit() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.player_mut().hit_timer = 0.0;
    engine.player_mut().apply_upgrade(UpgradeKind::Shield);
    spawn_enemy_bullet_at(
        &mut engine,
        polar_to_cartesian(-FRAC_PI_2, PLAYER_ORBIT_RADIUS),
    );

    let snap = engine.tick(&idle());
    assert_eq!(snap.player.lives, PLAYER_START_LIVES, "The shield absorbs the hit");
    assert!(snap.player.shield_active);
    assert!(snap.enemy_bullets.is_empty(), "The bullet is still consumed");
    assert!(!snap.audio_events.iter().any(|e| matches!(e, AudioEvent::Hit)));
}

#[test]
fn test_debug_invulnerability_blocks_hits() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);
    engine.player_mut().hit_timer = 0.0;
    spawn_enemy_bullet_at(
        &mut engine,
        polar_to_cartesian(-FRAC_PI_2, PLAYER_ORBIT_RADIUS),
    );

    let snap = engine.tick(&idle());
    assert!(snap.player.invulnerable);
    assert_eq!(snap.player.lives, PLAYER_START_LIVES);
}

#[test]
fn test_ramming_gated_by_stage() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.player_mut().hit_timer = 0.0;
    spawn_test_enemy(&mut engine, -FRAC_PI_2, PLAYER_ORBIT_RADIUS);

    let snap = engine.tick(&idle());
    assert_eq!(
        snap.player.lives,
        PLAYER_START_LIVES - 1,
        "Ramming costs a life while playing"
    );
    assert!(snap.enemies.is_empty(), "The rammer is destroyed");

    engine.force_phase(GamePhase::Bonus);
    engine.player_mut().hit_timer = 0.0;
    spawn_test_enemy(&mut engine, -FRAC_PI_2, PLAYER_ORBIT_RADIUS);

    let snap = engine.tick(&idle());
    assert_eq!(
        snap.player.lives,
        PLAYER_START_LIVES - 1,
        "No ramming in the bonus stage"
    );
    assert_eq!(snap.enemies.len(), 1);
}

// ---- Enemy behavior ----

#[test]
fn test_enemy_entry_then_hover() {
    let mut world = World::new();
    world.spawn((Enemy {
        kind: EnemyKind::Fighter,
        angle: 0.0,
        radius: -20.0,
        angular_speed: 0.3,
        target_radius: 200.0,
        enter_speed: 150.0,
        entering: true,
        loop_amplitude: 50.0,
        loop_frequency: 1.0,
        loop_phase: 0.0,
        time: 0.0,
        health: 1,
        points: FIGHTER_POINTS,
        fire_timer: 1000.0,
        color: "#24d8ff".to_string(),
    },));

    movement::run(&mut world, 1.0);
    {
        let (_, enemy) = world.query_mut::<&Enemy>().into_iter().next().unwrap();
        assert!(enemy.entering);
        assert!((enemy.radius - 130.0).abs() < 1e-9);
    }

    movement::run(&mut world, 1.0);
    {
        let (_, enemy) = world.query_mut::<&Enemy>().into_iter().next().unwrap();
        assert!(!enemy.entering, "Reaching the target radius ends entry");
        assert_eq!(enemy.radius, 200.0, "The radius snaps to the target");
    }

    movement::run(&mut world, 0.5);
    let (_, enemy) = world.query_mut::<&Enemy>().into_iter().next().unwrap();
    let expected = 200.0 + (2.5_f64).sin() * 50.0;
    assert!(
        (enemy.radius - expected).abs() < 1e-9,
        "Hover holds the radius on the sine around the target"
    );
}

#[test]
fn test_enemy_fires_only_while_playing() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    let entity = spawn_test_enemy(&mut engine, 0.0, 250.0);
    engine
        .world_mut()
        .query_one_mut::<&mut Enemy>(entity)
        .unwrap()
        .fire_timer = 0.01;

    engine.force_phase(GamePhase::Bonus);
    let snap = engine.tick(&idle());
    assert!(
        snap.enemy_bullets.is_empty(),
        "Fire control is frozen outside playing"
    );

    engine.force_phase(GamePhase::Playing);
    let snap = engine.tick(&idle());
    assert_eq!(
        snap.enemy_bullets.len(),
        1,
        "The timer expires on the first playing tick"
    );
}

#[test]
fn test_enemy_bullets_expire() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.world_mut().spawn((EnemyBullet {
        pos: DVec2::new(100.0, 100.0),
        vel: DVec2::ZERO,
        life: 0.1,
    },));

    let snap = engine.tick(&idle());
    assert_eq!(snap.enemy_bullets.len(), 1);
    let snap = run_ticks(&mut engine, &idle(), 10);
    assert!(snap.enemy_bullets.is_empty());
}

// ---- Waves and progression ----

#[test]
fn test_cleared_field_pulls_spawn_forward() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);

    let mut spawned_after = None;
    for i in 0..20 {
        let snap = engine.tick(&idle());
        if !snap.enemies.is_empty() {
            spawned_after = Some(i);
            assert_eq!(snap.wave, 2);
            break;
        }
    }
    let ticks = spawned_after.expect("A follow-up wave arrives");
    assert!(ticks <= 12, "The cleared field pulls the spawn timer down");
}

#[test]
fn test_satellite_phase_progression() {
    let mut engine = started_engine(42);
    engine.session_mut().wave = 3;
    clear_field(&mut engine);

    let mut saw_satellites = false;
    let mut saw_single_carrier = false;
    let mut saw_warp = false;
    let mut snap = engine.tick(&idle());
    for _ in 0..2200 {
        snap = engine.tick(&idle());
        if snap.satellites.len() == SATELLITES_PER_WAVE as usize {
            saw_satellites = true;
            let carriers = snap
                .satellites
                .iter()
                .filter(|s| s.power_up.is_some())
                .count();
            if carriers == 1 {
                saw_single_carrier = true;
            }
        }
        if snap.phase == GamePhase::Warp {
            saw_warp = true;
        }
        if saw_warp && snap.phase == GamePhase::Playing {
            break;
        }
    }
    assert!(saw_satellites, "Satellite mini-waves spawn on the third wave");
    assert!(saw_single_carrier, "Exactly one carrier per mini-wave");
    assert!(saw_warp, "A completed satellite phase leads into a warp");
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.wave, 4, "The next regular wave follows the warp");
    assert_eq!(snap.warps_to_planet, WARPS_PER_PLANET - 1);
    assert!(snap.score >= WARP_SCORE_BONUS);
}

#[test]
fn test_satellite_power_up_grant() {
    let mut engine = started_engine(42);
    clear_field(&mut engine);
    engine.world_mut().spawn((Satellite {
        angle: -FRAC_PI_2,
        radius: 300.0,
        life: SATELLITE_LIFE_SECS,
        power_up: Some(PowerUpKind::Upgrade(UpgradeKind::RapidFire)),
        color: "#ffff00".to_string(),
    },));

    let mut saw_power_up_sound = false;
    let mut snap = engine.tick(&firing());
    for _ in 0..12 {
        if snap
            .audio_events
            .iter()
            .any(|e| matches!(e, AudioEvent::PowerUp))
        {
            saw_power_up_sound = true;
            break;
        }
        snap = engine.tick(&idle());
    }
    assert!(saw_power_up_sound, "Carrier kills play the power-up sound");
    assert_eq!(snap.score, SATELLITE_POINTS);
    assert!(snap.satellites.is_empty());
    assert!(snap
        .player
        .upgrades
        .iter()
        .any(|u| u.kind == UpgradeKind::RapidFire));
}

#[test]
fn test_upgrade_expires() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);
    engine.player_mut().apply_upgrade(UpgradeKind::Shield);

    let snap = engine.tick(&idle());
    assert!(snap.player.shield_active);
    assert_eq!(snap.player.upgrades.len(), 1);
    assert_eq!(snap.player.upgrades[0].kind, UpgradeKind::Shield);

    let snap = run_ticks(&mut engine, &idle(), 620);
    assert!(!snap.player.shield_active, "The shield expires");
    assert!(snap.player.upgrades.is_empty());
}

// ---- Warp ----

#[test]
fn test_warp_awards_and_clears() {
    let mut engine = started_engine(42);
    run_ticks(&mut engine, &idle(), 2);
    engine.queue_command(PlayerCommand::TriggerWarp);

    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Warp);
    assert_eq!(snap.score, WARP_SCORE_BONUS);
    assert!(snap.enemies.is_empty(), "Live enemies burst at warp start");
    assert!(!snap.particles.is_empty());
    assert!(snap.audio_events.iter().any(|e| matches!(e, AudioEvent::Warp)));
    assert!(snap.player.hit_timer > 2.9, "The warp grants invulnerability");

    let snap = run_ticks(&mut engine, &idle(), 175);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.wave, 2);
    assert_eq!(snap.warps_to_planet, WARPS_PER_PLANET - 1);
    assert!(
        !snap.enemies.is_empty(),
        "A fresh wave spawns once the warp lands"
    );
}

#[test]
fn test_double_warp_trigger_single_award() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::TriggerWarp);
    engine.queue_command(PlayerCommand::TriggerWarp);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Warp);
    assert_eq!(
        snap.score, WARP_SCORE_BONUS,
        "Re-entrant warp triggers are guarded"
    );
}

#[test]
fn test_warp_guarded_outside_playing() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SkipToBoss);
    engine.tick(&idle());
    engine.queue_command(PlayerCommand::TriggerWarp);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Boss, "No warp out of a boss fight");
    assert_eq!(snap.score, 0);
}

#[test]
fn test_stale_warp_completion_dropped_after_restart() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::TriggerWarp);
    engine.tick(&idle());

    engine.force_phase(GamePhase::GameOver);
    engine.queue_command(PlayerCommand::Start);
    engine.tick(&idle());

    let snap = run_ticks(&mut engine, &idle(), 200);
    assert_eq!(
        snap.planet_index, 0,
        "The stale completion must not advance progression"
    );
    assert_eq!(snap.warps_to_planet, WARPS_PER_PLANET);
    assert_eq!(snap.phase, GamePhase::Playing);
}

#[test]
fn test_bonus_stage_after_planet_hop() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);

    for _ in 0..WARPS_PER_PLANET - 1 {
        engine.queue_command(PlayerCommand::TriggerWarp);
        run_ticks(&mut engine, &idle(), 180);
    }
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.warps_to_planet, 1);

    engine.queue_command(PlayerCommand::TriggerWarp);
    let snap = run_ticks(&mut engine, &idle(), 180);
    assert_eq!(snap.phase, GamePhase::Bonus);
    assert_eq!(snap.planet_name, "Uranus");
    assert_eq!(snap.planet_index, 1);
    assert_eq!(snap.warps_to_planet, WARPS_PER_PLANET);
    assert_eq!(snap.enemies.len(), 20, "The bonus ring is twenty fighters");

    clear_field(&mut engine);
    let mut saw_warp = false;
    for _ in 0..160 {
        let snap = engine.tick(&idle());
        if snap.phase == GamePhase::Warp {
            saw_warp = true;
            break;
        }
    }
    assert!(saw_warp, "A cleared bonus ring rolls straight into a warp");
}

// ---- Boss encounters ----

#[test]
fn test_skip_to_boss_cycles_variants() {
    let mut engine = started_engine(42);

    engine.queue_command(PlayerCommand::SkipToBoss);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Boss);
    assert_eq!(snap.planet_name, "THE CORE");
    assert_eq!(snap.warps_to_planet, 1);
    let boss = snap.boss.expect("Boss view present");
    assert_eq!(boss.kind, BossKind::Serpent);
    assert!((boss.health_ratio - 1.0).abs() < 1e-9);
    assert_eq!(boss.sub_targets.len(), 10);

    engine.queue_command(PlayerCommand::SkipToBoss);
    let snap = engine.tick(&idle());
    assert_eq!(snap.boss.expect("Boss view present").kind, BossKind::TurretRing);

    engine.queue_command(PlayerCommand::SkipToBoss);
    let snap = engine.tick(&idle());
    assert_eq!(snap.boss.expect("Boss view present").kind, BossKind::OrbitalCore);

    engine.queue_command(PlayerCommand::SkipToBoss);
    let snap = engine.tick(&idle());
    assert_eq!(snap.boss.expect("Boss view present").kind, BossKind::Serpent);
}

#[test]
fn test_boss_death_sequence_and_victory() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SkipToBoss);
    engine.tick(&idle());

    {
        let boss = engine.boss_mut().expect("Boss active");
        for _ in 0..10 {
            let _ = boss.take_damage(0, 99);
        }
        assert!(boss.is_destroying());
    }

    let snap = engine.tick(&idle());
    let view = snap.boss.expect("The wreck stays on screen while destroying");
    assert!(view.is_destroying);
    assert!(view.sub_targets.is_empty());
    assert_eq!(view.health_ratio, 0.0);

    let mut snap = engine.tick(&idle());
    for _ in 0..280 {
        if snap.phase == GamePhase::Victory {
            break;
        }
        snap = engine.tick(&idle());
    }
    assert_eq!(snap.phase, GamePhase::Victory);
    assert!(snap.boss.is_none(), "The boss clears on the victory tick");
    assert_eq!(snap.score, 10_000, "Only the terminal burst awards here");
    assert!(snap.game_over_timer > 0.0);

    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.planet_name, "Neptune");
    assert_eq!(snap.score, 0);
}

#[test]
fn test_boss_stops_firing_while_destroying() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SkipToBoss);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);
    engine.tick(&idle());

    let mut saw_shots = false;
    for _ in 0..120 {
        let snap = engine.tick(&idle());
        if !snap.enemy_bullets.is_empty() {
            saw_shots = true;
            break;
        }
    }
    assert!(saw_shots, "The serpent volleys while alive");

    {
        let boss = engine.boss_mut().expect("Boss active");
        for _ in 0..10 {
            let _ = boss.take_damage(0, 99);
        }
    }
    // Let the shots already in flight expire.
    run_ticks(&mut engine, &idle(), 160);
    for _ in 0..60 {
        let snap = engine.tick(&idle());
        assert!(
            snap.enemy_bullets.is_empty(),
            "No new volleys during the death sequence"
        );
    }
}

#[test]
fn test_autofire_wears_the_boss_down() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SkipToBoss);
    engine.queue_command(PlayerCommand::ToggleInvulnerable);
    engine.tick(&idle());

    let mut snap = engine.tick(&firing());
    for _ in 0..1800 {
        snap = engine.tick(&firing());
        if snap.phase != GamePhase::Boss {
            break;
        }
    }
    let weakened = match &snap.boss {
        Some(view) => view.health_ratio < 1.0,
        None => snap.phase == GamePhase::Victory,
    };
    assert!(weakened, "Sustained fire should land hits on the boss");
}

// ---- Time control ----

#[test]
fn test_time_scale_clamps_and_freezes() {
    let mut engine = new_engine(42);
    engine.queue_command(PlayerCommand::SetTimeScale { scale: 9.0 });
    engine.tick(&idle());
    assert_eq!(engine.time_scale(), 4.0);

    engine.queue_command(PlayerCommand::SetTimeScale { scale: -3.0 });
    engine.tick(&idle());
    assert_eq!(engine.time_scale(), 0.0);

    let before = engine.time();
    let snap = engine.tick(&idle());
    assert_eq!(snap.time.tick, before.tick + 1);
    assert!(
        (snap.time.elapsed_secs - before.elapsed_secs).abs() < 1e-12,
        "A zero scale freezes the clock"
    );
}

// ---- Cleanup ----

#[test]
fn test_bullets_cull_at_the_hub() {
    let mut engine = started_engine(42);
    engine.tick(&firing());
    engine.queue_command(PlayerCommand::TriggerWarp);

    let snap = run_ticks(&mut engine, &idle(), 50);
    assert_eq!(snap.phase, GamePhase::Warp);
    assert!(snap.bullets.is_empty(), "Bullets expire at the center");
}

#[test]
fn test_snapshot_views_sorted_by_id() {
    let mut engine = started_engine(42);
    let snap = run_ticks(&mut engine, &idle(), 30);
    assert!(!snap.enemies.is_empty());
    assert!(snap.enemies.windows(2).all(|w| w[0].id < w[1].id));
}

// ---- Particles ----

#[test]
fn test_explosion_particle_mix() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    world_setup::spawn_explosion(&mut world, &mut rng, &mut events, DVec2::ZERO, "#ff0000", 15);

    let mut normal = 0;
    let mut spark = 0;
    let mut smoke = 0;
    for (_, particle) in world.query_mut::<&Particle>() {
        match particle.kind {
            ParticleKind::Normal => normal += 1,
            ParticleKind::Spark => spark += 1,
            ParticleKind::Smoke => smoke += 1,
        }
    }
    assert_eq!((normal, spark, smoke), (9, 5, 1));
    assert!(matches!(events[0], AudioEvent::Explosion { count: 15, .. }));

    world_setup::spawn_explosion(
        &mut world,
        &mut rng,
        &mut events,
        DVec2::ZERO,
        "#ff0000",
        BIG_EXPLOSION_PARTICLES,
    );
    assert!(matches!(events[1], AudioEvent::BigExplosion { .. }));
}
