//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gyre_boss_ai::behavior::BossState;
use gyre_core::commands::{InputState, PlayerCommand};
use gyre_core::components::{Bullet, Enemy, EnemyBullet, Missile, Satellite};
use gyre_core::constants::{
    BULLET_SPAWN_OFFSET, DT, MAX_DT, MISSILE_COOLDOWN_SECS, PLANETS, PLAYER_ORBIT_RADIUS,
    WARPS_PER_PLANET, WARP_DURATION_SECS, WARP_INVULN_SECS, WARP_SCORE_BONUS,
};
use gyre_core::enums::{BossKind, GamePhase};
use gyre_core::events::AudioEvent;
use gyre_core::state::GameSnapshot;
use gyre_core::types::{polar_to_cartesian, SimTime};

use crate::player::PlayerState;
use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// A scheduled warp completion. Carries the session generation so a
/// completion scheduled before a restart discards itself.
struct PendingWarp {
    fire_at: f64,
    generation: u64,
}

/// The boss variant order used by the debug skip command.
const BOSS_CYCLE: [BossKind; 3] = [
    BossKind::Serpent,
    BossKind::TurretRing,
    BossKind::OrbitalCore,
];

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    session: SessionState,
    player: PlayerState,
    boss: Option<BossState>,
    /// Last variant spawned by the debug skip; repeat skips cycle it.
    boss_cycle: Option<usize>,
    /// Bumped on every restart. Stale deferred events compare against it.
    generation: u64,
    pending_warp: Option<PendingWarp>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            session: SessionState::default(),
            player: PlayerState::new(),
            boss: None,
            boss_cycle: None,
            generation: 0,
            pending_warp: None,
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> GameSnapshot {
        self.process_commands();

        let dt = (DT * self.time_scale).min(MAX_DT);
        self.session.world_time += dt;

        if let Some(pending) = self.pending_warp.take() {
            if self.time.elapsed_secs < pending.fire_at {
                self.pending_warp = Some(pending);
            } else if pending.generation == self.generation {
                self.complete_warp();
            }
        }

        if self.phase != GamePhase::Attract {
            self.run_systems(dt, input);
        }

        if matches!(self.phase, GamePhase::GameOver | GamePhase::Victory) {
            self.session.game_over_timer += dt;
        }

        self.time.advance(dt);

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            &self.player,
            &self.boss,
            audio_events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                let armed = matches!(
                    self.phase,
                    GamePhase::Attract | GamePhase::GameOver | GamePhase::Victory
                );
                if armed {
                    self.reset_game();
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::FireMissile => {
                let combat = matches!(
                    self.phase,
                    GamePhase::Playing | GamePhase::Bonus | GamePhase::Boss
                );
                if combat && self.player.missile_timer <= 0.0 {
                    self.world.spawn((Missile {
                        angle: self.player.angle,
                        radius: PLAYER_ORBIT_RADIUS - BULLET_SPAWN_OFFSET,
                    },));
                    self.player.missile_timer = MISSILE_COOLDOWN_SECS;
                    self.audio_events.push(AudioEvent::Laser);
                }
            }
            PlayerCommand::TriggerWarp => self.trigger_warp(),
            PlayerCommand::SkipToBoss => self.skip_to_boss(),
            PlayerCommand::ToggleInvulnerable => {
                self.player.invulnerable = !self.player.invulnerable;
            }
        }
    }

    fn run_systems(&mut self, dt: f64, input: &InputState) {
        // 1. Player steering, timers, and firing
        systems::player_control::run(
            &mut self.world,
            &mut self.player,
            self.phase,
            input,
            dt,
            &mut self.audio_events,
        );

        // 2. Kinematics for everything in the world
        systems::movement::run(&mut self.world, dt);

        // 3. Missile flight and detonation
        systems::missiles::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &mut self.player,
            self.phase,
            dt,
            &mut self.audio_events,
        );

        // 4. Enemy fire control
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.phase,
            self.player.pos(),
            dt,
        );

        // 5. Boss encounter
        if self.phase == GamePhase::Boss {
            if let Some(boss) = self.boss.as_mut() {
                let won = systems::boss_control::run(
                    &mut self.world,
                    boss,
                    &mut self.rng,
                    &mut self.session,
                    self.player.pos(),
                    dt,
                    &mut self.audio_events,
                );
                if won {
                    self.boss = None;
                    self.phase = GamePhase::Victory;
                    self.session.game_over_timer = 0.0;
                }
            }
        }

        // 6. Wave spawning and stage progression
        let warp_requested = systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            self.phase,
            dt,
        );
        if warp_requested {
            self.trigger_warp();
        }

        // 7. Collision pipeline
        let player_died = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &mut self.player,
            &mut self.boss,
            self.phase,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        if player_died {
            self.trigger_game_over();
        }

        // 8. Cleanup of despawned and expired entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Begin a fresh run. Stale deferred warps self-invalidate via the
    /// generation bump.
    fn reset_game(&mut self) {
        self.generation += 1;
        self.world.clear();
        self.session = SessionState::default();
        self.player.reset();
        self.boss = None;
        self.boss_cycle = None;
        self.phase = GamePhase::Playing;
        self.spawn_wave();
    }

    fn spawn_wave(&mut self) {
        self.session.wave += 1;
        world_setup::spawn_next_wave(&mut self.world, &mut self.rng, self.session.wave);
    }

    /// Enter the warp transition: award the bonus, flash every enemy and
    /// satellite into debris, and schedule the completion.
    fn trigger_warp(&mut self) {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::Bonus) {
            return;
        }
        self.phase = GamePhase::Warp;
        self.session.world_time = 0.0;
        self.session.score += WARP_SCORE_BONUS;
        self.session.waves_completed = 0;
        self.session.destroyed_count = 0;
        self.session.in_current_wave_count = 0;
        self.player.hit_timer = WARP_INVULN_SECS;
        self.audio_events.push(AudioEvent::Warp);

        let mut bursts: Vec<(glam::DVec2, String)> = Vec::new();
        for (entity, enemy) in self.world.query_mut::<&Enemy>() {
            bursts.push((
                polar_to_cartesian(enemy.angle, enemy.radius),
                enemy.color.clone(),
            ));
            self.despawn_buffer.push(entity);
        }
        for (entity, satellite) in self.world.query_mut::<&Satellite>() {
            bursts.push((
                polar_to_cartesian(satellite.angle, satellite.radius),
                satellite.color.clone(),
            ));
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        for (pos, color) in bursts {
            world_setup::spawn_explosion(
                &mut self.world,
                &mut self.rng,
                &mut self.audio_events,
                pos,
                &color,
                15,
            );
        }

        self.pending_warp = Some(PendingWarp {
            fire_at: self.time.elapsed_secs + WARP_DURATION_SECS,
            generation: self.generation,
        });
    }

    /// Land the warp: advance progression and enter the next stage.
    fn complete_warp(&mut self) {
        self.session.warps_to_planet = self.session.warps_to_planet.saturating_sub(1);
        if self.session.warps_to_planet > 0 {
            self.phase = GamePhase::Playing;
            self.spawn_wave();
            return;
        }

        if self.session.planet_index == PLANETS.len() - 2 {
            // Arrival at the final planet: the boss gauntlet.
            self.session.planet_index += 1;
            self.session.warps_to_planet = 1;
            self.phase = GamePhase::Boss;
            let kind = boss_kind_for(self.session.planet_index);
            self.boss = Some(BossState::spawn(kind, &mut self.rng));
        } else {
            self.session.planet_index += 1;
            self.session.warps_to_planet = WARPS_PER_PLANET;
            self.phase = GamePhase::Bonus;
            world_setup::spawn_bonus_wave(&mut self.world, &mut self.rng);
        }
    }

    /// Lives are out: burst the ship and sweep combat entities.
    /// Missiles, satellites, and debris stay for the fade-out.
    fn trigger_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.session.game_over_timer = 0.0;
        let pos = self.player.pos();
        world_setup::spawn_explosion(
            &mut self.world,
            &mut self.rng,
            &mut self.audio_events,
            pos,
            "#ffffff",
            50,
        );
        for (entity, _) in self.world.query_mut::<&Enemy>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&Bullet>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&EnemyBullet>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Debug shortcut: clear the field and fight the next boss variant.
    fn skip_to_boss(&mut self) {
        if !matches!(
            self.phase,
            GamePhase::Playing | GamePhase::Bonus | GamePhase::Boss
        ) {
            return;
        }
        let next = self.boss_cycle.map_or(0, |index| (index + 1) % BOSS_CYCLE.len());
        self.boss_cycle = Some(next);

        for (entity, _) in self.world.query_mut::<&Enemy>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&Satellite>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&EnemyBullet>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        self.session.planet_index = PLANETS.len() - 1;
        self.session.warps_to_planet = 1;
        self.phase = GamePhase::Boss;
        self.boss = Some(BossState::spawn(BOSS_CYCLE[next], &mut self.rng));
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    #[cfg(test)]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn boss_mut(&mut self) -> Option<&mut BossState> {
        self.boss.as_mut()
    }

    #[cfg(test)]
    pub fn force_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }
}

/// Variant for a natural boss arrival at the given planet.
fn boss_kind_for(planet_index: usize) -> BossKind {
    match (planet_index / 3).min(2) {
        0 => BossKind::Serpent,
        1 => BossKind::TurretRing,
        _ => BossKind::OrbitalCore,
    }
}
