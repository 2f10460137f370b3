//! Asteroid rain simulation
//!
//! Each tick runs spawner, motion, ship/asteroid overlap and culling in that
//! order against the entity store. Draws go through `RandomSource` and
//! asteroids are visited by id, so a seed plus the move commands replays a
//! session exactly.

pub mod collision;
pub mod motion;
pub mod rng;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bodies_overlap, circles_overlap, ship_contacts};
pub use rng::{PcgSource, RandomSource, RngState, ScriptedSource};
pub use score::ScoreTracker;
pub use spawner::{SpawnRequest, Spawner};
pub use state::{Asteroid, AsteroidVariant, EntityStore, GameEvent, GameState, Glide, Ship};
pub use tick::{TickInput, tick};
