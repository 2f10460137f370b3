//! Asteroid Rain headless runner
//!
//! Drives a session without a renderer: the ship sweeps back and forth
//! along the bottom of the screen while asteroids fall. Useful for eyeballing
//! tuning changes in the log.
//!
//! Usage: `asteroid-rain [seed] [seconds] [config.json]`

use glam::Vec2;

use asteroid_rain::consts::SIM_DT;
use asteroid_rain::sim::GameEvent;
use asteroid_rain::{SimConfig, Simulation};

/// Seconds between scripted move commands
const COMMAND_PERIOD: f32 = 1.25;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Asteroid Rain (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(30.0);

    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match SimConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid config {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Could not read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut sim = match Simulation::new(config, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    run(&mut sim, seconds);

    let snapshot = sim.snapshot_entities();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
    println!("Final score {}, best {}", sim.current_score(), sim.best_score());
}

fn run(sim: &mut Simulation, seconds: f32) {
    let half_width = sim.config().screen_width / 2.0;
    let ship_y = sim.config().ship_start.y;
    let mut elapsed = 0.0;
    let mut next_command = 0.0;
    let mut heading_right = true;
    let mut collisions = 0u32;
    let mut passed = 0u32;

    while elapsed < seconds {
        if elapsed >= next_command {
            let x = 0.6 * if heading_right { half_width } else { -half_width };
            sim.issue_move_command(Vec2::new(x, ship_y));
            heading_right = !heading_right;
            next_command += COMMAND_PERIOD;
        }

        sim.advance(SIM_DT);
        elapsed += SIM_DT;

        for event in sim.drain_events() {
            match event {
                GameEvent::Collision { .. } => collisions += 1,
                GameEvent::AsteroidCulled { .. } => passed += 1,
                GameEvent::ScoreChanged { score } => log::debug!("Score: {}", score),
                GameEvent::AsteroidSpawned { .. } => {}
            }
        }
    }

    log::info!(
        "Ran {:.1}s: {} asteroids passed, {} collision ticks",
        elapsed,
        passed,
        collisions
    );
}
