//! sim-harness: headless driver for the gyre simulation core.
//!
//! Usage:
//!   sim-harness simulate --seed 7 --ticks 1200 --fire
//!   sim-harness demo --seed 42 --fast

use std::process;
use std::time::{Duration, Instant};

use gyre_core::commands::{InputState, PlayerCommand};
use gyre_core::constants::TICK_RATE;
use gyre_core::enums::GamePhase;
use gyre_core::events::AudioEvent;
use gyre_core::types::wrap_angle;
use gyre_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "simulate" => cmd_simulate(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sim-harness: headless driver for the gyre simulation core\n\
         \n\
         Commands:\n\
         \n\
         simulate  Run a fixed number of ticks, print the final snapshot JSON\n\
         \n\
           --seed <n>    RNG seed (default: 42)\n\
           --ticks <n>   Tick count (default: 600)\n\
           --scale <x>   Time scale, clamped to 0..4 (default: 1)\n\
           --fire        Hold the trigger for the whole run\n\
         \n\
         demo      Scripted session at real-time pacing: waves, warps, and\n\
                   a boss fight, with an event log\n\
         \n\
           --seed <n>    RNG seed (default: 42)\n\
           --ticks <n>   Tick cap (default: 18000)\n\
           --fast        Run unpaced\n\
         \n\
         Examples:\n\
         \n\
           sim-harness simulate --seed 7 --ticks 1200 --fire\n\
           sim-harness demo --seed 42 --fast\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    default
}

fn parse_scale(args: &[String]) -> Option<f64> {
    for i in 0..args.len() {
        if args[i] == "--scale" && i + 1 < args.len() {
            if let Ok(x) = args[i + 1].parse::<f64>() {
                return Some(x);
            }
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

// --- Simulate command ---

fn cmd_simulate(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let ticks = parse_u64(args, "--ticks", 600);
    let fire = has_flag(args, "--fire");

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::Start);
    if let Some(scale) = parse_scale(args) {
        engine.queue_command(PlayerCommand::SetTimeScale { scale });
    }

    let input = InputState {
        fire_held: fire,
        ..Default::default()
    };

    eprintln!("Seed: {seed}");
    eprintln!("Running {ticks} ticks...");

    let mut snap = engine.tick(&input);
    for _ in 1..ticks {
        snap = engine.tick(&input);
    }

    eprintln!(
        "Done! phase={:?} score={} wave={} planet={}",
        snap.phase, snap.score, snap.wave, snap.planet_name
    );

    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    }
}

// --- Demo command ---

/// Scripted session: autofire while sweeping the ring, with a forced boss
/// encounter two thirds of the way through if the run has not reached one
/// on its own. Paced to real time unless --fast is given.
fn cmd_demo(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let ticks = parse_u64(args, "--ticks", 18_000);
    let fast = has_flag(args, "--fast");
    let boss_at = ticks * 2 / 3;

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::Start);

    eprintln!("Seed: {seed}");
    eprintln!(
        "Running up to {ticks} ticks{}...",
        if fast { " (unpaced)" } else { "" }
    );

    let mut phase = GamePhase::Attract;
    let mut last = None;
    let mut next_tick_time = Instant::now();
    for tick in 0..ticks {
        if tick == boss_at && matches!(phase, GamePhase::Playing | GamePhase::Bonus) {
            println!("[tick {tick}] forcing a boss encounter");
            engine.queue_command(PlayerCommand::SkipToBoss);
        }

        // Sweep the ship around the ring so shots rake every formation.
        let input = InputState {
            pointer_angle: Some(wrap_angle(tick as f64 * 0.008)),
            fire_held: true,
            ..Default::default()
        };
        let snap = engine.tick(&input);

        if snap.phase != phase {
            println!(
                "[tick {tick}] {:?} -> {:?} (score {}, wave {}, planet {})",
                phase, snap.phase, snap.score, snap.wave, snap.planet_name
            );
            phase = snap.phase;
        }
        for event in &snap.audio_events {
            match event {
                AudioEvent::PowerUp => println!("[tick {tick}] power-up collected"),
                AudioEvent::Warp => println!("[tick {tick}] warp engaged"),
                AudioEvent::BigExplosion { count, .. } => {
                    println!("[tick {tick}] big explosion ({count} particles)")
                }
                _ => {}
            }
        }

        let ended = matches!(snap.phase, GamePhase::GameOver | GamePhase::Victory);
        last = Some(snap);
        if ended {
            break;
        }

        if !fast {
            // Sleep until the next tick deadline, adjusting for time scale.
            let time_scale = engine.time_scale();
            let effective = if time_scale > 0.001 {
                TICK_DURATION.div_f64(time_scale)
            } else {
                TICK_DURATION
            };

            next_tick_time += effective;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > effective * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    match last {
        Some(snap) => eprintln!(
            "Done! phase={:?} score={} wave={} planet={} lives={}",
            snap.phase, snap.score, snap.wave, snap.planet_name, snap.player.lives
        ),
        None => eprintln!("Done! (no ticks run)"),
    }
}
