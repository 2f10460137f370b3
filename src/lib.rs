//! Asteroid Rain - dodge the falling rocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, score)
//! - `simulation`: Host-facing facade and fixed-timestep driver
//! - `config`: Validated simulation configuration
//!
//! Rendering, asset loading and input capture are the host's job. The host
//! forwards move targets in, ticks the simulation, and draws a snapshot.

pub mod config;
pub mod sim;
pub mod simulation;

pub use config::{BoundingShape, ConfigError, SimConfig};
pub use simulation::Simulation;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the host's render cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Maximum asteroids the spawner may emit in a single tick
    pub const MAX_SPAWNS_PER_TICK: u32 = 8;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 1024;

    /// Screen dimensions (points, origin at screen center)
    pub const SCREEN_WIDTH: f32 = 390.0;
    pub const SCREEN_HEIGHT: f32 = 844.0;

    /// Downward acceleration on asteroids (points/s²).
    /// 0.8 m/s² at 150 points per meter.
    pub const GRAVITY: f32 = 120.0;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 70.0;
    pub const SHIP_START_X: f32 = 0.0;
    pub const SHIP_START_Y: f32 = -373.0;
    /// Glide speed toward a move target (points/s)
    pub const SHIP_MOVE_SPEED: f32 = 250.0;

    /// Asteroid defaults (meteorBrown_big1 footprint)
    pub const ASTEROID_WIDTH: f32 = 101.0;
    pub const ASTEROID_HEIGHT: f32 = 84.0;
    /// Number of cosmetic asteroid variants
    pub const ASTEROID_VARIANTS: u8 = 4;

    /// Mean delay between spawns (seconds)
    pub const SPAWN_INTERVAL: f32 = 1.0;
    /// Spawn delay varies by up to this much either side of the mean
    pub const SPAWN_JITTER: f32 = 0.5;
}

/// Seconds to whole milliseconds, rounded to nearest
#[inline]
pub fn secs_to_millis(secs: f32) -> i32 {
    (secs * 1000.0).round() as i32
}
