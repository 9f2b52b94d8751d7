//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by exactly one step.

use super::state::{GameEvent, GamePhase, World};
use super::rng::RandomSource;
use crate::audio::AudioOut;
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump button went down
    pub jump_pressed: bool,
    /// Jump button came up
    pub jump_released: bool,
}

impl TickInput {
    pub fn press() -> Self {
        Self {
            jump_pressed: true,
            jump_released: false,
        }
    }

    pub fn release() -> Self {
        Self {
            jump_pressed: false,
            jump_released: true,
        }
    }

    /// Fold a later snapshot into this one (edges are sticky until consumed)
    pub fn merge(&mut self, other: TickInput) {
        self.jump_pressed |= other.jump_pressed;
        self.jump_released |= other.jump_released;
    }

    pub fn is_empty(&self) -> bool {
        !self.jump_pressed && !self.jump_released
    }
}

/// Advance the world by one fixed timestep
///
/// Order within a tick:
/// 1. apply input, then player physics (integrate, land)
/// 2. move entities, cull exited ones, score passed obstacles
/// 3. spawn an obstacle if due
/// 4. collision check (game over stops the tick here)
/// 5. spawn a cloud if due, else count down
/// 6. count down the obstacle timer unless it was just reseeded
///
/// Does nothing once the game is over.
pub fn tick<R, A>(world: &mut World, input: &TickInput, rng: &mut R, audio: &mut A)
where
    R: RandomSource + ?Sized,
    A: AudioOut + ?Sized,
{
    if !world.is_running() {
        return;
    }
    world.time_ticks += 1;

    // Input is sampled once, before physics
    if input.jump_pressed && world.player.begin_jump(rng, audio) {
        world.push_event(GameEvent::Jumped);
    }
    if input.jump_released {
        world.player.release_jump_early();
    }

    // 1. Player
    world.player.step_animation();
    world.player.integrate(GRAVITY);
    world.player.land_check(GROUND_Y);

    // 2. Entities
    let mut passed = 0u64;
    world.entities.retain_mut(|entity| {
        entity.advance();
        if entity.is_exited(0.0) {
            if entity.is_obstacle() {
                passed += 1;
            }
            false
        } else {
            true
        }
    });
    for _ in 0..passed {
        world.score += 1;
        log::debug!("Obstacle passed, score {}", world.score);
        let score = world.score;
        world.push_event(GameEvent::ObstaclePassed { score });
    }
    world.advance_scroll();

    // 3. Obstacle spawn
    let obstacle_spawned = world.spawner.obstacle_due();
    if obstacle_spawned {
        let id = world.next_entity_id();
        let (width, speed) = (world.width, world.obstacle_speed());
        let obstacle = world.spawner.spawn_obstacle(rng, id, width, speed);
        world.entities.push(obstacle);
    }

    // 4. Collision
    let player_box = world.player.bounds();
    if world.obstacles().any(|e| e.bounds().overlaps(&player_box)) {
        world.phase = GamePhase::GameOver;
        let score = world.score;
        world.push_event(GameEvent::GameOver { score });
        log::info!("Game over after {} ticks, score {}", world.time_ticks, score);
        return;
    }

    // 5. Cloud spawn
    let id = world.next_entity_id();
    let (width, height) = (world.width, world.height);
    if let Some(cloud) = world.spawner.tick_cloud(rng, id, width, height) {
        world.entities.push(cloud);
    }

    // 6. Obstacle countdown
    if !obstacle_spawned {
        world.spawner.count_down_obstacle();
    }
}
