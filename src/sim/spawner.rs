//! Timed asteroid spawning
//!
//! One state: waiting for `remaining` seconds. When the wait runs out an
//! asteroid is requested and a fresh jittered delay is drawn. The first
//! asteroid comes on the very first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::AsteroidVariant;
use crate::config::SimConfig;
use crate::consts::{ASTEROID_VARIANTS, MAX_SPAWNS_PER_TICK};
use crate::secs_to_millis;

/// Where and what to spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub pos: Vec2,
    pub variant: AsteroidVariant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next spawn
    remaining: f32,
    /// Total asteroids requested this session
    spawned: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Count down by `dt` and emit every spawn that came due.
    ///
    /// Overshoot carries into the next wait so cadence does not depend on
    /// frame rate. After `MAX_SPAWNS_PER_TICK` in one call the rest of the
    /// debt is forgiven.
    pub fn update<R: RandomSource>(
        &mut self,
        dt: f32,
        config: &SimConfig,
        rng: &mut R,
    ) -> Vec<SpawnRequest> {
        self.remaining -= dt;

        let mut requests = Vec::new();
        let mut last_delay = 0.0;
        while self.remaining <= 0.0 {
            if requests.len() as u32 >= MAX_SPAWNS_PER_TICK {
                log::warn!(
                    "Spawner fell {:.2}s behind, dropping backlog",
                    -self.remaining
                );
                self.remaining = last_delay;
                break;
            }

            requests.push(Self::roll(config, rng));
            self.spawned += 1;

            last_delay = Self::roll_delay(config, rng);
            self.remaining += last_delay;
        }

        requests
    }

    /// Variant first, then horizontal offset
    fn roll<R: RandomSource>(config: &SimConfig, rng: &mut R) -> SpawnRequest {
        let variant = AsteroidVariant::from_draw(rng.next_int(1, ASTEROID_VARIANTS as i32));
        let (low, high) = config.spawn_x_range();
        let x = rng.next_int(low, high) as f32;
        SpawnRequest {
            pos: Vec2::new(x, config.spawn_y()),
            variant,
        }
    }

    /// Delay in whole milliseconds from interval ± jitter
    fn roll_delay<R: RandomSource>(config: &SimConfig, rng: &mut R) -> f32 {
        let low = secs_to_millis(config.min_spawn_delay());
        let high = secs_to_millis(config.max_spawn_delay());
        rng.next_int(low, high) as f32 / 1000.0
    }
}
