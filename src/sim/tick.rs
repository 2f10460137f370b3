//! Simulation tick
//!
//! One frame of the game: spawn, move, collide, cull. Order matters and is
//! fixed so that replays with the same seed and inputs are identical.

use glam::Vec2;

use super::collision::ship_contacts;
use super::motion;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::MAX_PENDING_EVENTS;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest move target received since the previous tick
    pub move_target: Option<Vec2>,
}

/// Advance the game state by `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    // Hosts occasionally hand over garbage frame times (clock jumps, NaN)
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    // Commands apply before anything moves
    match input.move_target {
        Some(target) if target.is_finite() => {
            let ship = &mut state.entities.ship;
            ship.glide_to(target, state.config.ship_move_speed);
            log::debug!(
                "Ship gliding ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                ship.pos.x,
                ship.pos.y,
                target.x,
                target.y
            );
        }
        Some(target) => {
            log::warn!("Ignoring non-finite move target ({}, {})", target.x, target.y);
        }
        None => {}
    }

    state.time_ticks += 1;
    state.time_secs += dt as f64;

    // Spawn
    for request in state.spawner.update(dt, &state.config, &mut state.rng) {
        let id = state.entities.insert_asteroid(
            request.pos,
            state.config.asteroid_size,
            request.variant,
        );
        log::debug!(
            "Spawned asteroid {} ({}) at x={}",
            id,
            request.variant.asset_name(),
            request.pos.x
        );
        state.events.push(GameEvent::AsteroidSpawned {
            id,
            pos: request.pos,
            variant: request.variant,
        });
    }

    // Move
    if motion::step(&mut state.entities, state.config.gravity, dt) {
        log::debug!("Ship arrived at ({:.1}, {:.1})", state.entities.ship.pos.x, state.entities.ship.pos.y);
    }

    // Collide. Every overlapping tick resets, not just the first contact.
    let contacts = ship_contacts(
        &state.entities.ship,
        state.entities.asteroids(),
        state.config.bounding_shape,
    );
    for id in contacts {
        log::trace!("Ship touching asteroid {}", id);
        state.events.push(GameEvent::Collision { id });
        let score = state.score.reset();
        state.events.push(GameEvent::ScoreChanged { score });
    }

    // Cull
    for asteroid in motion::cull(&mut state.entities, state.config.cull_y()) {
        let score = state.score.increment(1);
        log::debug!("Asteroid {} passed, score {}", asteroid.id, score);
        state.events.push(GameEvent::AsteroidCulled { id: asteroid.id });
        state.events.push(GameEvent::ScoreChanged { score });
    }

    // Hosts that never drain still get a bounded log; oldest go first
    if state.events.len() > MAX_PENDING_EVENTS {
        let excess = state.events.len() - MAX_PENDING_EVENTS;
        state.events.drain(..excess);
    }
}
