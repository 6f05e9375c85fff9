//! Wave pacing: decides what to spawn once the field is clear.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gyre_core::components::{Enemy, Satellite};
use gyre_core::constants::{
    CLEARED_SPAWN_DELAY_SECS, SATELLITES_PER_WAVE, SATELLITE_PHASE_EVERY,
    SATELLITE_WAVES_PER_PHASE, WAVE_SPAWN_DELAY_SECS,
};
use gyre_core::enums::GamePhase;

use crate::session::SessionState;
use crate::world_setup;

/// Run the spawn decision when the field is clear and the timer expires.
/// Returns true when progression calls for a warp instead of a spawn:
/// after a cleared bonus ring, or once a satellite phase completes.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    phase: GamePhase,
    dt: f64,
) -> bool {
    if !matches!(phase, GamePhase::Playing | GamePhase::Bonus) {
        return false;
    }
    let field_clear = world.query_mut::<&Enemy>().into_iter().next().is_none()
        && world.query_mut::<&Satellite>().into_iter().next().is_none();
    if !field_clear {
        return false;
    }

    session.spawn_timer = session.spawn_timer.min(CLEARED_SPAWN_DELAY_SECS);
    session.spawn_timer -= dt;
    if session.spawn_timer > 0.0 {
        return false;
    }
    session.spawn_timer = WAVE_SPAWN_DELAY_SECS;

    if phase == GamePhase::Bonus {
        return true;
    }

    if session.wave % SATELLITE_PHASE_EVERY == 0 {
        if session.waves_completed < SATELLITE_WAVES_PER_PHASE {
            world_setup::spawn_satellite_wave(world, rng);
            session.in_current_wave_count = SATELLITES_PER_WAVE;
            session.destroyed_count = 0;
            session.waves_completed += 1;
            return false;
        }
        // All mini-waves spawned and cleared: the phase is over.
        return true;
    }

    session.waves_completed = 0;
    session.destroyed_count = 0;
    session.in_current_wave_count = 0;
    session.wave += 1;
    world_setup::spawn_next_wave(world, rng, session.wave);
    false
}
