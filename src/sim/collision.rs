//! Axis-aligned bounding boxes
//!
//! Everything in the world is an upright rectangle anchored at its
//! bottom-left corner, so overlap tests reduce to interval checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its min (bottom-left) and max (top-right) corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from a bottom-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether two boxes overlap
    ///
    /// Edges are inclusive: boxes that merely touch count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if self.max.x < other.min.x || self.min.x > other.max.x {
            return false;
        }
        if self.max.y < other.min.y || self.min.y > other.max.y {
            return false;
        }
        true
    }
}
