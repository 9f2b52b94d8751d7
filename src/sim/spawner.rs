//! Randomized spawn scheduling for obstacles and clouds
//!
//! Each category has a countdown in ticks. When a countdown is due (zero) the
//! spawn fires and the countdown is reseeded uniformly from
//! `[SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX]`. Both start due, so a fresh game
//! spawns one of each on its first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, ObstacleKind};
use super::rng::RandomSource;
use crate::consts::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks until the next obstacle
    pub next_obstacle: u32,
    /// Ticks until the next cloud
    pub next_cloud: u32,
}

fn reseed<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    rng.range_inclusive(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX)
        .clamp(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX) as u32
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacle_due(&self) -> bool {
        self.next_obstacle == 0
    }

    pub fn cloud_due(&self) -> bool {
        self.next_cloud == 0
    }

    /// Create an obstacle at the right edge, resting on the ground, and reseed
    pub fn spawn_obstacle<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        id: u32,
        world_width: f32,
        speed: f32,
    ) -> Entity {
        let kind = ObstacleKind::random(rng);
        self.next_obstacle = reseed(rng);
        log::debug!(
            "Spawned obstacle #{} {:?} (next in {} ticks)",
            id,
            kind,
            self.next_obstacle
        );
        Entity::obstacle(id, kind, Vec2::new(world_width, GROUND_Y), speed)
    }

    /// Create a cloud at the right edge with random height and speed, and reseed
    pub fn spawn_cloud<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        id: u32,
        world_width: f32,
        world_height: f32,
    ) -> Entity {
        let drop = rng.range_inclusive(CLOUD_DROP_MIN, CLOUD_DROP_MAX);
        let speed = rng.range_inclusive(CLOUD_SPEED_MIN, CLOUD_SPEED_MAX);
        self.next_cloud = reseed(rng);
        log::debug!("Spawned cloud #{} speed {} (next in {} ticks)", id, speed, self.next_cloud);
        Entity::cloud(id, Vec2::new(world_width, world_height - drop as f32), speed as f32)
    }

    pub fn count_down_obstacle(&mut self) {
        self.next_obstacle = self.next_obstacle.saturating_sub(1);
    }

    pub fn count_down_cloud(&mut self) {
        self.next_cloud = self.next_cloud.saturating_sub(1);
    }

    /// One tick of obstacle scheduling: spawn if due, otherwise count down
    pub fn tick_obstacle<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        id: u32,
        world_width: f32,
        speed: f32,
    ) -> Option<Entity> {
        if self.obstacle_due() {
            Some(self.spawn_obstacle(rng, id, world_width, speed))
        } else {
            self.count_down_obstacle();
            None
        }
    }

    /// One tick of cloud scheduling: spawn if due, otherwise count down
    pub fn tick_cloud<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        id: u32,
        world_width: f32,
        world_height: f32,
    ) -> Option<Entity> {
        if self.cloud_due() {
            Some(self.spawn_cloud(rng, id, world_width, world_height))
        } else {
            self.count_down_cloud();
            None
        }
    }

    /// Make both categories due again (restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
