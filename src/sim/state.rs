//! Game state and core simulation types
//!
//! Everything the tick pipeline reads or writes lives here. The host only
//! ever sees it through a snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::{PcgSource, RandomSource};
use super::score::ScoreTracker;
use super::spawner::Spawner;
use crate::config::{ConfigError, SimConfig};
use crate::consts::ASTEROID_VARIANTS;

/// Cosmetic asteroid art selector (1..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsteroidVariant(u8);

impl AsteroidVariant {
    pub fn new(n: u8) -> Option<Self> {
        (1..=ASTEROID_VARIANTS).contains(&n).then_some(Self(n))
    }

    /// Clamp an arbitrary draw into the valid range
    pub fn from_draw(n: i32) -> Self {
        Self(n.clamp(1, ASTEROID_VARIANTS as i32) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Texture name the host should draw this variant with
    pub fn asset_name(&self) -> String {
        format!("meteorBrown_big{}", self.0)
    }
}

/// An in-flight straight-line move toward a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glide {
    pub start: Vec2,
    pub target: Vec2,
    /// Total time to cover the distance (seconds)
    pub duration: f32,
    /// Time spent so far (seconds)
    pub elapsed: f32,
}

impl Glide {
    /// Position along the path after `elapsed` seconds
    pub fn position(&self) -> Vec2 {
        if self.elapsed >= self.duration {
            return self.target;
        }
        self.start.lerp(self.target, self.elapsed / self.duration)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The player's ship. Not affected by gravity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    /// Active move command, if any
    pub glide: Option<Glide>,
}

impl Ship {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            glide: None,
        }
    }

    /// Start gliding from the current position toward `target`.
    ///
    /// Replaces any glide already in flight.
    pub fn glide_to(&mut self, target: Vec2, speed: f32) {
        let distance = self.pos.distance(target);
        if distance <= f32::EPSILON {
            self.pos = target;
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            start: self.pos,
            target,
            duration: distance / speed,
            elapsed: 0.0,
        });
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }
}

/// A falling asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    /// Accumulated fall velocity (starts at rest)
    pub vel: Vec2,
    pub size: Vec2,
    pub variant: AsteroidVariant,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidSpawned { id: u32, pos: Vec2, variant: AsteroidVariant },
    /// Asteroid fell past the bottom threshold and was removed
    AsteroidCulled { id: u32 },
    /// Ship overlapped an asteroid this tick
    Collision { id: u32 },
    ScoreChanged { score: u64 },
}

/// Owns the ship and every live asteroid.
///
/// Asteroids are kept sorted by id for deterministic iteration. Ids are
/// handed out monotonically and never reused within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    pub ship: Ship,
    asteroids: Vec<Asteroid>,
    next_id: u32,
}

impl EntityStore {
    pub fn new(ship: Ship) -> Self {
        Self {
            ship,
            asteroids: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an asteroid at rest and return its id
    pub fn insert_asteroid(&mut self, pos: Vec2, size: Vec2, variant: AsteroidVariant) -> u32 {
        let id = self.next_entity_id();
        // Ids only grow, so pushing keeps the list sorted
        self.asteroids.push(Asteroid {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            variant,
        });
        id
    }

    pub fn remove_asteroid(&mut self, id: u32) -> Option<Asteroid> {
        let idx = self.asteroids.binary_search_by_key(&id, |a| a.id).ok()?;
        Some(self.asteroids.remove(idx))
    }

    /// Remove every asteroid matching `pred`, returning them in id order
    pub fn remove_where(&mut self, mut pred: impl FnMut(&Asteroid) -> bool) -> Vec<Asteroid> {
        let mut removed = Vec::new();
        self.asteroids.retain(|a| {
            if pred(a) {
                removed.push(a.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn asteroid(&self, id: u32) -> Option<&Asteroid> {
        self.asteroids
            .binary_search_by_key(&id, |a| a.id)
            .ok()
            .map(|idx| &self.asteroids[idx])
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R = PcgSource> {
    pub config: SimConfig,
    pub rng: R,
    pub entities: EntityStore,
    pub spawner: Spawner,
    pub score: ScoreTracker,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds since start
    pub time_secs: f64,
    /// Events since the host last drained them, capped at `MAX_PENDING_EVENTS`
    pub events: Vec<GameEvent>,
}

impl<R: RandomSource> GameState<R> {
    /// Validate `config` and build a fresh session
    pub fn new(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let ship = Ship::new(config.ship_start, config.ship_size);
        Ok(Self {
            config,
            rng,
            entities: EntityStore::new(ship),
            spawner: Spawner::new(),
            score: ScoreTracker::new(),
            time_ticks: 0,
            time_secs: 0.0,
            events: Vec::new(),
        })
    }
}
