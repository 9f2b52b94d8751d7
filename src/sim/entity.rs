//! Movable entities: obstacles and clouds
//!
//! Entities scroll right-to-left at a constant speed fixed at creation and are
//! culled once their right edge passes the left boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::rng::{RandomSource, pick_index};
use crate::consts::*;
use crate::render::{Sprite, SpriteInstance};

/// Obstacle visual kinds (identical physics, different sprite and footprint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Skyscraper,
    NuclearSilo,
    PhoneTower,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Skyscraper,
        ObstacleKind::NuclearSilo,
        ObstacleKind::PhoneTower,
    ];

    /// Uniformly random obstacle kind
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[pick_index(rng, Self::ALL.len())]
    }

    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Skyscraper => Vec2::new(60.0, 160.0),
            ObstacleKind::NuclearSilo => Vec2::new(80.0, 100.0),
            ObstacleKind::PhoneTower => Vec2::new(40.0, 140.0),
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            ObstacleKind::Skyscraper => Sprite::Skyscraper,
            ObstacleKind::NuclearSilo => Sprite::NuclearSilo,
            ObstacleKind::PhoneTower => Sprite::PhoneTower,
        }
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Background scenery, never collides
    Cloud,
    /// Ends the run on contact with the player
    Obstacle(ObstacleKind),
}

/// A scrolling world object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick, leftward. Fixed at creation.
    speed: f32,
}

impl Entity {
    /// Create an obstacle sized for its kind
    pub fn obstacle(id: u32, kind: ObstacleKind, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Obstacle(kind),
            pos,
            size: kind.size(),
            speed: speed.max(0.0),
        }
    }

    pub fn cloud(id: u32, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Cloud,
            pos,
            size: Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT),
            speed: speed.max(0.0),
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle(_))
    }

    /// Move one tick to the left
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    /// True once the right edge is at or past `left_edge`
    pub fn is_exited(&self, left_edge: f32) -> bool {
        self.pos.x + self.size.x <= left_edge
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn sprite(&self) -> Sprite {
        match self.kind {
            EntityKind::Cloud => Sprite::Cloud,
            EntityKind::Obstacle(kind) => kind.sprite(),
        }
    }

    pub fn sprite_instance(&self) -> SpriteInstance {
        SpriteInstance {
            pos: self.pos,
            size: self.size,
            sprite: self.sprite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedSource;
    use proptest::prelude::*;

    #[test]
    fn test_advance_moves_left_by_speed() {
        let mut e = Entity::cloud(1, Vec2::new(100.0, 300.0), 3.0);
        e.advance();
        assert_eq!(e.pos.x, 97.0);
        assert_eq!(e.pos.y, 300.0);
        assert_eq!(e.speed(), 3.0);
    }

    #[test]
    fn test_negative_speed_clamped() {
        let e = Entity::cloud(1, Vec2::ZERO, -2.0);
        assert_eq!(e.speed(), 0.0);
    }

    #[test]
    fn test_is_exited_boundary() {
        let kind = ObstacleKind::PhoneTower;
        let width = kind.size().x;
        let mut e = Entity::obstacle(1, kind, Vec2::new(-width + 1.0, GROUND_Y), 1.0);
        assert!(!e.is_exited(0.0));
        e.advance();
        // Right edge exactly at the boundary counts as exited
        assert!(e.is_exited(0.0));
    }

    #[test]
    fn test_obstacle_flags() {
        let obstacle = Entity::obstacle(1, ObstacleKind::Skyscraper, Vec2::ZERO, 2.0);
        let cloud = Entity::cloud(2, Vec2::ZERO, 2.0);
        assert!(obstacle.is_obstacle());
        assert!(!cloud.is_obstacle());
        assert_eq!(obstacle.sprite(), Sprite::Skyscraper);
        assert_eq!(cloud.sprite(), Sprite::Cloud);
        assert_eq!(obstacle.size, ObstacleKind::Skyscraper.size());
    }

    #[test]
    fn test_random_kind_covers_all() {
        let mut rng = ScriptedSource::new([0, 1, 2]);
        let kinds: Vec<ObstacleKind> = (0..3).map(|_| ObstacleKind::random(&mut rng)).collect();
        assert_eq!(kinds, ObstacleKind::ALL.to_vec());
    }

    proptest! {
        #[test]
        fn prop_advance_decrements_by_exact_speed(x in -1000.0f32..1000.0, speed in 0.0f32..10.0) {
            let mut e = Entity::cloud(1, Vec2::new(x, 200.0), speed);
            let expected = x - speed;
            e.advance();
            prop_assert_eq!(e.pos.x, expected);
        }
    }
}
