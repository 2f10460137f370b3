//! Host-facing simulation handle
//!
//! Wraps `GameState` with the small surface a renderer needs: feed move
//! targets in, tick, read a snapshot back out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimConfig};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{AsteroidVariant, GameEvent, GameState, PcgSource, RandomSource, TickInput, tick};

/// Ship render data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Asteroid render data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub id: u32,
    pub pos: Vec2,
    pub variant: AsteroidVariant,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ship: ShipView,
    /// Sorted by id
    pub asteroids: Vec<AsteroidView>,
    pub score: u64,
}

pub struct Simulation<R = PcgSource> {
    state: GameState<R>,
    /// Commands buffered until the next tick
    input: TickInput,
    /// Unsimulated time for the fixed-step driver
    accumulator: f32,
}

impl Simulation<PcgSource> {
    /// Build a session with a seeded PCG source
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        log::info!("Simulation initialized with seed: {}", seed);
        Self::with_rng(config, PcgSource::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Build a session around any random source
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        let state = GameState::new(config, rng)?;
        log::info!(
            "Screen {}x{}, gravity {}, collision shape {}",
            state.config.screen_width,
            state.config.screen_height,
            state.config.gravity,
            state.config.bounding_shape.as_str()
        );
        Ok(Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
        })
    }

    /// Advance one frame of `elapsed` seconds
    pub fn tick(&mut self, elapsed: f32) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, elapsed);
    }

    /// Fixed-timestep driver: bank `frame_time` and run whole `SIM_DT`
    /// ticks. Returns the number of ticks run. Backlog beyond
    /// `MAX_SUBSTEPS` is discarded.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        if frame_time.is_finite() && frame_time > 0.0 {
            self.accumulator += frame_time;
        }

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.tick(SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if self.accumulator >= SIM_DT {
            log::warn!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    /// Steer the ship toward `target`. Takes effect on the next tick; a
    /// later command before then wins.
    pub fn issue_move_command(&mut self, target: Vec2) {
        self.input.move_target = Some(target);
    }

    pub fn snapshot_entities(&self) -> Snapshot {
        let ship = &self.state.entities.ship;
        Snapshot {
            ship: ShipView {
                pos: ship.pos,
                size: ship.size,
            },
            asteroids: self
                .state
                .entities
                .asteroids()
                .iter()
                .map(|a| AsteroidView {
                    id: a.id,
                    pos: a.pos,
                    variant: a.variant,
                })
                .collect(),
            score: self.state.score.current(),
        }
    }

    pub fn current_score(&self) -> u64 {
        self.state.score.current()
    }

    pub fn best_score(&self) -> u64 {
        self.state.score.best()
    }

    /// Take every event recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Restart the random sequence; entities and score are untouched
    pub fn reseed(&mut self, seed: u64) {
        log::info!("Reseeding simulation with seed: {}", seed);
        self.state.rng.reseed(seed);
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.state.config
    }
}
