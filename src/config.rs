//! Simulation configuration
//!
//! Supplied once at construction and validated up front so the tick path
//! never has to deal with degenerate geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    #[error("{entity} size must be positive and finite, got {width}x{height}")]
    InvalidSize {
        entity: &'static str,
        width: f32,
        height: f32,
    },

    #[error("ship move speed must be positive and finite, got {0}")]
    InvalidMoveSpeed(f32),

    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f32),

    #[error("spawn interval {interval}s with jitter {jitter}s does not give a positive delay")]
    InvalidSpawnTiming { interval: f32, jitter: f32 },

    #[error("ship start position must be finite, got ({0}, {1})")]
    InvalidShipStart(f32, f32),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shape used to approximate sprite silhouettes for overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundingShape {
    /// Axis-aligned box matching the sprite size
    #[default]
    Aabb,
    /// Circle inscribed in the sprite size
    Circle,
}

impl BoundingShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundingShape::Aabb => "aabb",
            BoundingShape::Circle => "circle",
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    /// Visible width in points (origin at screen center)
    pub screen_width: f32,
    /// Visible height in points (origin at screen center)
    pub screen_height: f32,

    // === Physics ===
    /// Downward acceleration on asteroids (points/s²)
    pub gravity: f32,

    // === Ship ===
    /// Glide speed toward a move target (points/s)
    pub ship_move_speed: f32,
    pub ship_size: Vec2,
    pub ship_start: Vec2,

    // === Asteroids ===
    pub asteroid_size: Vec2,
    /// Mean spawn delay (seconds)
    pub spawn_interval: f32,
    /// Spawn delay is drawn from interval ± jitter (seconds)
    pub spawn_jitter: f32,

    // === Collision ===
    pub bounding_shape: BoundingShape,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,

            ship_move_speed: SHIP_MOVE_SPEED,
            ship_size: Vec2::splat(SHIP_SIZE),
            ship_start: Vec2::new(SHIP_START_X, SHIP_START_Y),

            asteroid_size: Vec2::new(ASTEROID_WIDTH, ASTEROID_HEIGHT),
            spawn_interval: SPAWN_INTERVAL,
            spawn_jitter: SPAWN_JITTER,

            bounding_shape: BoundingShape::Aabb,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl SimConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter the tick path relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.screen_width) || !positive(self.screen_height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        for (entity, size) in [("ship", self.ship_size), ("asteroid", self.asteroid_size)] {
            if !positive(size.x) || !positive(size.y) {
                return Err(ConfigError::InvalidSize {
                    entity,
                    width: size.x,
                    height: size.y,
                });
            }
        }

        if !positive(self.ship_move_speed) {
            return Err(ConfigError::InvalidMoveSpeed(self.ship_move_speed));
        }

        if !positive(self.gravity) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }

        // Shortest possible delay must still be a whole positive millisecond
        let jitter_ok = self.spawn_jitter.is_finite() && self.spawn_jitter >= 0.0;
        if !positive(self.spawn_interval)
            || !jitter_ok
            || self.min_spawn_delay() < 0.001
        {
            return Err(ConfigError::InvalidSpawnTiming {
                interval: self.spawn_interval,
                jitter: self.spawn_jitter,
            });
        }

        if !self.ship_start.is_finite() {
            return Err(ConfigError::InvalidShipStart(self.ship_start.x, self.ship_start.y));
        }

        Ok(())
    }

    /// Shortest delay the spawner can draw (seconds)
    pub fn min_spawn_delay(&self) -> f32 {
        self.spawn_interval - self.spawn_jitter
    }

    /// Longest delay the spawner can draw (seconds)
    pub fn max_spawn_delay(&self) -> f32 {
        self.spawn_interval + self.spawn_jitter
    }

    /// Asteroids start one asteroid height above the visible top edge
    pub fn spawn_y(&self) -> f32 {
        self.screen_height / 2.0 + self.asteroid_size.y
    }

    /// Inclusive horizontal spawn range.
    ///
    /// Skewed left by one asteroid width: the left bound sits a full width
    /// past the screen edge while the right bound sits a width inside it.
    pub fn spawn_x_range(&self) -> (i32, i32) {
        let half = self.screen_width / 2.0;
        let w = self.asteroid_size.x;
        (-(half + w) as i32, (half - w) as i32)
    }

    /// Asteroids below this y have left the screen for good
    pub fn cull_y(&self) -> f32 {
        -self.screen_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_spawn_geometry() {
        let config = SimConfig::default();
        assert_eq!(config.spawn_y(), 422.0 + 84.0);
        assert_eq!(config.spawn_x_range(), (-296, 94));
        assert_eq!(config.cull_y(), -844.0);
    }

    #[test]
    fn test_rejects_negative_screen() {
        let config = SimConfig {
            screen_width: -390.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScreen { .. })));
    }

    #[test]
    fn test_rejects_zero_move_speed() {
        let config = SimConfig {
            ship_move_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMoveSpeed(_))));
    }

    #[test]
    fn test_rejects_nan_size() {
        let config = SimConfig {
            asteroid_size: Vec2::new(f32::NAN, 84.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { entity: "asteroid", .. })
        ));
    }

    #[test]
    fn test_rejects_jitter_swallowing_interval() {
        let config = SimConfig {
            spawn_interval: 1.0,
            spawn_jitter: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnTiming { .. })
        ));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let config = SimConfig {
            gravity: -120.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGravity(_))));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SimConfig::from_json(r#"{ "screen_width": 500.0, "bounding_shape": "Circle" }"#)
            .expect("valid config");
        assert_eq!(config.screen_width, 500.0);
        assert_eq!(config.screen_height, SCREEN_HEIGHT);
        assert_eq!(config.bounding_shape, BoundingShape::Circle);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(SimConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            SimConfig::from_json(r#"{ "ship_move_speed": -1.0 }"#),
            Err(ConfigError::InvalidMoveSpeed(_))
        ));
    }
}
