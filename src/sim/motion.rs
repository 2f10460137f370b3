//! Per-tick motion integration
//!
//! Asteroids free-fall under constant gravity; the ship ignores gravity and
//! glides toward its commanded target.

use glam::Vec2;

use super::state::{Asteroid, EntityStore, Ship};

/// Advance the ship along its glide. Returns true on the tick it arrives.
pub fn advance_ship(ship: &mut Ship, dt: f32) -> bool {
    let Some(glide) = ship.glide.as_mut() else {
        return false;
    };

    glide.elapsed += dt;
    ship.pos = glide.position();

    if glide.is_finished() {
        // Land exactly on target and hold there
        ship.pos = glide.target;
        ship.glide = None;
        return true;
    }
    false
}

/// Integrate one asteroid under constant downward acceleration.
///
/// Uses the closed-form step so the result after total time `t` is the
/// same however the time is sliced into ticks.
pub fn fall(asteroid: &mut Asteroid, gravity: f32, dt: f32) {
    let accel = Vec2::new(0.0, -gravity);
    asteroid.pos += asteroid.vel * dt + 0.5 * accel * dt * dt;
    asteroid.vel += accel * dt;
}

/// Move the ship and every asteroid forward by `dt`
pub fn step(entities: &mut EntityStore, gravity: f32, dt: f32) -> bool {
    let arrived = advance_ship(&mut entities.ship, dt);
    for asteroid in entities.asteroids_mut() {
        fall(asteroid, gravity, dt);
    }
    arrived
}

/// Remove every asteroid that has dropped below `cull_y`
pub fn cull(entities: &mut EntityStore, cull_y: f32) -> Vec<Asteroid> {
    entities.remove_where(|a| a.pos.y < cull_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidVariant;
    use approx::assert_abs_diff_eq;

    fn ship() -> Ship {
        Ship::new(Vec2::new(0.0, -373.0), Vec2::splat(70.0))
    }

    fn rock(y: f32) -> Asteroid {
        Asteroid {
            id: 1,
            pos: Vec2::new(0.0, y),
            vel: Vec2::ZERO,
            size: Vec2::new(101.0, 84.0),
            variant: AsteroidVariant::new(1).unwrap(),
        }
    }

    #[test]
    fn test_ship_arrives_on_time() {
        let mut ship = ship();
        ship.glide_to(Vec2::new(100.0, -373.0), 250.0);

        assert!(!advance_ship(&mut ship, 0.2));
        assert_abs_diff_eq!(ship.pos.x, 50.0, epsilon = 1e-4);

        assert!(advance_ship(&mut ship, 0.2));
        assert_eq!(ship.pos, Vec2::new(100.0, -373.0));
        assert!(!ship.is_gliding());

        // Holds position afterwards
        assert!(!advance_ship(&mut ship, 1.0));
        assert_eq!(ship.pos, Vec2::new(100.0, -373.0));
    }

    #[test]
    fn test_ship_overshooting_tick_lands_on_target() {
        let mut ship = ship();
        ship.glide_to(Vec2::new(0.0, -123.0), 250.0);
        assert!(advance_ship(&mut ship, 5.0));
        assert_eq!(ship.pos, Vec2::new(0.0, -123.0));
    }

    #[test]
    fn test_new_command_starts_from_current_position() {
        let mut ship = ship();
        ship.glide_to(Vec2::new(100.0, -373.0), 250.0);
        advance_ship(&mut ship, 0.2);
        let midway = ship.pos;

        ship.glide_to(Vec2::new(midway.x, -373.0 + 250.0), 250.0);
        advance_ship(&mut ship, 0.5);
        assert_abs_diff_eq!(ship.pos.x, midway.x, epsilon = 1e-4);
        assert_abs_diff_eq!(ship.pos.y, -373.0 + 125.0, epsilon = 1e-3);
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        let g = 120.0;
        let dt = 1.0 / 60.0;
        let mut a = rock(506.0);
        for _ in 0..120 {
            fall(&mut a, g, dt);
        }
        let t = 120.0 * dt;
        assert_abs_diff_eq!(a.pos.y, 506.0 - 0.5 * g * t * t, epsilon = 1e-2);
        assert_abs_diff_eq!(a.vel.y, -g * t, epsilon = 1e-3);
        assert_eq!(a.pos.x, 0.0);
    }

    #[test]
    fn test_fall_independent_of_slicing() {
        let mut coarse = rock(0.0);
        fall(&mut coarse, 120.0, 1.0);
        let mut fine = rock(0.0);
        for _ in 0..4 {
            fall(&mut fine, 120.0, 0.25);
        }
        assert_abs_diff_eq!(coarse.pos.y, fine.pos.y, epsilon = 1e-3);
        assert_abs_diff_eq!(coarse.pos.y, -60.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fall_is_monotonic() {
        let mut a = rock(506.0);
        let mut prev = a.pos.y;
        for _ in 0..600 {
            fall(&mut a, 120.0, 1.0 / 60.0);
            assert!(a.pos.y < prev);
            prev = a.pos.y;
        }
    }

    #[test]
    fn test_cull_below_threshold_only() {
        let mut store = EntityStore::new(ship());
        let variant = AsteroidVariant::new(2).unwrap();
        store.insert_asteroid(Vec2::new(0.0, -844.0), Vec2::ONE, variant);
        store.insert_asteroid(Vec2::new(0.0, -844.5), Vec2::ONE, variant);
        let culled = cull(&mut store, -844.0);
        assert_eq!(culled.len(), 1);
        assert_eq!(culled[0].id, 2);
        assert_eq!(store.len(), 1);
    }
}
