//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at normal time scale.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum delta-time applied in one tick (seconds).
/// Caps catch-up jumps when the time scale is raised.
pub const MAX_DT: f64 = 0.05;

// --- World geometry ---

/// Radius of the player's orbit around the world center.
pub const PLAYER_ORBIT_RADIUS: f64 = 378.0;

/// Player ship size; collision hitboxes derive from it.
pub const PLAYER_SIZE: f64 = 20.0;

/// Radius at which outward-drifting enemies are culled.
pub const OUTER_BOUND_RADIUS: f64 = 495.0;

/// Radius below which inward-flying entities are culled.
/// Negative: the entity has crossed the center and kept going.
pub const INNER_BOUND_RADIUS: f64 = -20.0;

// --- Player ---

/// Angular speed of the player ship (rad/s).
pub const PLAYER_ANGULAR_SPEED: f64 = 3.2;

/// Starting lives.
pub const PLAYER_START_LIVES: u32 = 5;

/// Post-hit invulnerability window (seconds).
pub const PLAYER_HIT_INVULN_SECS: f64 = 2.5;

/// Cooldown between missile launches (seconds).
pub const MISSILE_COOLDOWN_SECS: f64 = 2.5;

/// Angle the player resets to.
pub const PLAYER_RESET_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// Player hitbox radius against enemy bullets.
pub const PLAYER_BULLET_HITBOX: f64 = PLAYER_SIZE * 0.8;

/// Player hitbox radius against enemy hulls.
pub const PLAYER_RAM_HITBOX: f64 = PLAYER_SIZE + 12.0;

// --- Weapon policy ---

/// Whether a life-losing hit strips the current weapon and all upgrades.
pub const STRIP_ARSENAL_ON_HIT: bool = true;

/// Seconds a non-base weapon persists before reverting to the laser.
pub const WEAPON_REVERT_SECS: f64 = 15.0;

/// Spread step for triple-shot fans on weapons without their own (radians).
pub const TRIPLE_SHOT_SPREAD: f64 = 0.1;

// --- Projectiles ---

/// Radial offset inward from the player orbit at which bullets spawn.
pub const BULLET_SPAWN_OFFSET: f64 = 15.0;

/// Radius at or below which a player bullet is culled.
pub const BULLET_CULL_RADIUS: f64 = 20.0;

/// Missile radial speed (world units/s, negative = inward).
pub const MISSILE_SPEED: f64 = -250.0;

/// Radius at or below which a missile detonates.
pub const MISSILE_DETONATE_RADIUS: f64 = 6.0;

/// Missile splash damage radius.
pub const MISSILE_BLAST_RADIUS: f64 = 60.0;

/// Enemy bullet speed (world units/s).
pub const ENEMY_BULLET_SPEED: f64 = 350.0;

/// Enemy bullet lifetime (seconds).
pub const ENEMY_BULLET_LIFE_SECS: f64 = 2.5;

// --- Enemies ---

/// Entering-phase radial speed, lower bound (world units/s).
pub const ENEMY_ENTER_SPEED_MIN: f64 = 120.0;

/// Entering-phase radial speed, upper bound (world units/s).
pub const ENEMY_ENTER_SPEED_MAX: f64 = 180.0;

/// Loop-phase oscillation amplitude, lower bound.
pub const ENEMY_LOOP_AMPLITUDE_MIN: f64 = 38.0;

/// Loop-phase oscillation amplitude, upper bound.
pub const ENEMY_LOOP_AMPLITUDE_MAX: f64 = 120.0;

/// Loop-phase oscillation frequency, lower bound (rad/s).
pub const ENEMY_LOOP_FREQUENCY_MIN: f64 = 0.9;

/// Loop-phase oscillation frequency, upper bound (rad/s).
pub const ENEMY_LOOP_FREQUENCY_MAX: f64 = 1.6;

/// First-shot delay after spawn, lower bound (seconds).
pub const ENEMY_FIRST_SHOT_MIN: f64 = 1.5;

/// First-shot delay after spawn, upper bound (seconds).
pub const ENEMY_FIRST_SHOT_MAX: f64 = 4.0;

/// Delay between shots, lower bound (seconds).
pub const ENEMY_RESHOT_MIN: f64 = 3.0;

/// Delay between shots, upper bound (seconds).
pub const ENEMY_RESHOT_MAX: f64 = 5.0;

/// Enemy kill radius for player bullets.
pub const ENEMY_KILL_RADIUS: f64 = 18.0;

/// Fighter hull health.
pub const FIGHTER_HEALTH: u32 = 1;

/// Saucer hull health.
pub const SAUCER_HEALTH: u32 = 2;

/// Points for a fighter kill.
pub const FIGHTER_POINTS: u32 = 100;

/// Points for a saucer kill.
pub const SAUCER_POINTS: u32 = 150;

// --- Satellites ---

/// Satellite spawn radius.
pub const SATELLITE_SPAWN_RADIUS: f64 = OUTER_BOUND_RADIUS;

/// Satellite radial speed (world units/s, negative = inward).
pub const SATELLITE_SPEED: f64 = -150.0;

/// Satellite lifetime (seconds).
pub const SATELLITE_LIFE_SECS: f64 = 6.0;

/// Satellite kill radius for player bullets.
pub const SATELLITE_KILL_RADIUS: f64 = 15.0;

/// Points for destroying a satellite.
pub const SATELLITE_POINTS: u32 = 50;

/// Chance a power-up satellite carries an upgrade rather than a weapon.
pub const POWER_UP_UPGRADE_CHANCE: f64 = 0.6;

/// Satellite mini-waves per power-up phase.
pub const SATELLITE_WAVES_PER_PHASE: u32 = 3;

/// Satellites per mini-wave.
pub const SATELLITES_PER_WAVE: u32 = 3;

/// Angular spacing between satellites in a mini-wave.
pub const SATELLITE_WAVE_SPACING: f64 = 0.2;

// --- Waves and progression ---

/// Spawn delay after a reset (seconds).
pub const FIRST_SPAWN_DELAY_SECS: f64 = 0.85;

/// Spawn delay between waves (seconds).
pub const WAVE_SPAWN_DELAY_SECS: f64 = 2.0;

/// Spawn delay cap once the player clears the field (seconds).
pub const CLEARED_SPAWN_DELAY_SECS: f64 = 0.15;

/// Every Nth wave enters the satellite phase.
pub const SATELLITE_PHASE_EVERY: u32 = 3;

/// Warps required to reach each intermediate planet.
pub const WARPS_PER_PLANET: u32 = 3;

/// Duration of the warp transition (seconds).
pub const WARP_DURATION_SECS: f64 = 2.8;

/// Invulnerability granted for the warp transition (seconds).
pub const WARP_INVULN_SECS: f64 = 3.0;

/// Score awarded for entering a warp.
pub const WARP_SCORE_BONUS: u32 = 1000;

/// The planet sequence. The final entry hosts the boss gauntlet.
pub const PLANETS: [&str; 7] = [
    "Neptune", "Uranus", "Saturn", "Jupiter", "Mars", "Earth", "THE CORE",
];

/// Enemy hull colors, drawn uniformly at spawn.
pub const ENEMY_COLORS: [&str; 5] = [
    "#24d8ff", "#ff6ae6", "#ffe066", "#ff9376", "#9d7bff",
];

// --- Particles ---

/// Particle count threshold for the big-explosion sound.
pub const BIG_EXPLOSION_PARTICLES: u32 = 100;

/// Fraction of an explosion burst emitted as colored normal particles.
pub const EXPLOSION_NORMAL_FRACTION: f64 = 0.6;

/// Fraction of an explosion burst emitted as white sparks.
pub const EXPLOSION_SPARK_FRACTION: f64 = 0.3;

/// Fraction of an explosion burst emitted as smoke.
pub const EXPLOSION_SMOKE_FRACTION: f64 = 0.1;
