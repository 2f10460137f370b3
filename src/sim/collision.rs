//! Ship vs asteroid overlap tests
//!
//! Sprites are approximated by a box or an inscribed circle centered on
//! the entity position. Silhouette-accurate shapes are out of scope; the
//! approximation is slightly generous at box corners.

use glam::Vec2;

use super::state::{Asteroid, Ship};
use crate::config::BoundingShape;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; boxes that only touch along an edge do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Strict overlap of two circles
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Whether two sprite-sized bodies overlap under `shape`
pub fn bodies_overlap(shape: BoundingShape, a: Vec2, a_size: Vec2, b: Vec2, b_size: Vec2) -> bool {
    match shape {
        BoundingShape::Aabb => Aabb::from_center(a, a_size).overlaps(&Aabb::from_center(b, b_size)),
        BoundingShape::Circle => {
            circles_overlap(a, a_size.min_element() * 0.5, b, b_size.min_element() * 0.5)
        }
    }
}

/// Ids of every asteroid currently touching the ship, in id order
pub fn ship_contacts(ship: &Ship, asteroids: &[Asteroid], shape: BoundingShape) -> Vec<u32> {
    asteroids
        .iter()
        .filter(|a| bodies_overlap(shape, ship.pos, ship.size, a.pos, a.size))
        .map(|a| a.id)
        .collect()
}
