//! Boss encounter stepping and effect application.
//!
//! Boss state machines live in gyre-boss-ai and never touch the world;
//! each step returns a `BossTick` of requested effects applied here.

use glam::DVec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gyre_boss_ai::behavior::{BossState, BossTick};
use gyre_core::events::AudioEvent;

use crate::session::SessionState;
use crate::world_setup;

/// Advance the boss one tick. Returns true on the tick the death
/// sequence completes and the encounter is won.
pub fn run(
    world: &mut World,
    boss: &mut BossState,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    player_pos: DVec2,
    dt: f64,
    events: &mut Vec<AudioEvent>,
) -> bool {
    let tick = boss.update(dt, player_pos, rng);
    apply_boss_tick(world, rng, session, events, tick)
}

/// Apply one `BossTick`'s shots, bursts, and score. Returns the
/// victory flag.
pub fn apply_boss_tick(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    events: &mut Vec<AudioEvent>,
    tick: BossTick,
) -> bool {
    for shot in &tick.shots {
        world_setup::spawn_enemy_bullet(world, shot.origin, shot.target);
    }
    for burst in &tick.bursts {
        world_setup::spawn_explosion(world, rng, events, burst.pos, burst.color, burst.count);
    }
    session.score += tick.score_delta;
    tick.victory
}
