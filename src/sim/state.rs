//! World state
//!
//! The world exclusively owns the player and every live entity. Nothing
//! outside holds references into it; hosts read snapshots (sprites, score,
//! events) between frames.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::player::Player;
use super::spawner::Spawner;
use crate::consts::*;
use crate::render::SpriteInstance;
use crate::settings::{Level, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being executed
    #[default]
    Running,
    /// Player hit an obstacle; only a reset leaves this phase
    GameOver,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// An obstacle scrolled off screen
    ObstaclePassed { score: u64 },
    /// Run ended with this score
    GameOver { score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub level: Level,
    pub player: Player,
    /// Live entities in spawn order
    pub entities: Vec<Entity>,
    /// Obstacles passed this run
    pub score: u64,
    pub phase: GamePhase,
    pub spawner: Spawner,
    /// Ground texture offset as a fraction of the world width, in `[0, 1)`
    pub scroll: f32,
    /// Ticks executed this run
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl World {
    /// Create a running world of the given size
    pub fn new(width: f32, height: f32, level: Level, player_x: f32) -> Self {
        Self {
            width,
            height,
            level,
            player: Player::new(player_x),
            entities: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            spawner: Spawner::new(),
            scroll: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.world_width,
            settings.world_height,
            settings.level,
            settings.player_x,
        )
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Start a new run: clear entities, ground the player, zero the score
    ///
    /// The level is kept.
    pub fn reset(&mut self) {
        self.player.reset();
        self.entities.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.spawner.reset();
        self.scroll = 0.0;
        self.time_ticks = 0;
        self.events.clear();
        self.next_id = 1;
        log::info!("World reset ({} level)", self.level);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Scroll speed of obstacles for the current level
    pub fn obstacle_speed(&self) -> f32 {
        self.level.obstacle_speed()
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_obstacle())
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events buffered since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the ground scroll offset by one tick
    pub fn advance_scroll(&mut self) {
        self.scroll = (self.scroll * self.width + GROUND_SCROLL_PER_TICK) % self.width / self.width;
    }

    /// Sprites to draw this frame, back to front: clouds, obstacles, player
    pub fn sprites(&self) -> Vec<SpriteInstance> {
        let clouds = self.entities.iter().filter(|e| e.kind == EntityKind::Cloud);
        let obstacles = self.obstacles();
        clouds
            .chain(obstacles)
            .map(Entity::sprite_instance)
            .chain(std::iter::once(self.player.sprite_instance()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Sprite;
    use crate::sim::entity::ObstacleKind;
    use glam::Vec2;

    fn world() -> World {
        World::new(WORLD_WIDTH, WORLD_HEIGHT, Level::Easy, PLAYER_X)
    }

    #[test]
    fn test_new_world_running() {
        let w = world();
        assert!(w.is_running());
        assert_eq!(w.score, 0);
        assert!(w.entities.is_empty());
        assert!(w.spawner.obstacle_due());
        assert_eq!(w.player.pos.y, GROUND_Y);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut w = world();
        let a = w.next_entity_id();
        let b = w.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_reset_clears_run_keeps_level() {
        let mut w = World::new(WORLD_WIDTH, WORLD_HEIGHT, Level::Hard, PLAYER_X);
        w.entities.push(Entity::cloud(1, Vec2::new(10.0, 10.0), 1.0));
        w.score = 12;
        w.phase = GamePhase::GameOver;
        w.spawner.next_obstacle = 50;
        w.time_ticks = 999;
        w.scroll = 0.5;
        w.player.pos.y = 300.0;
        w.push_event(GameEvent::Jumped);

        w.reset();
        let mut fresh = World::new(WORLD_WIDTH, WORLD_HEIGHT, Level::Hard, PLAYER_X);
        fresh.reset();
        assert_eq!(w, fresh);
        assert_eq!(w.level, Level::Hard);
    }

    #[test]
    fn test_scroll_wraps() {
        let mut w = world();
        for _ in 0..(WORLD_WIDTH as usize / 2) {
            w.advance_scroll();
        }
        assert!(w.scroll >= 0.0 && w.scroll < 1.0);
        assert!(w.scroll < 0.01 || w.scroll > 0.99);
    }

    #[test]
    fn test_sprites_back_to_front() {
        let mut w = world();
        w.entities.push(Entity::obstacle(1, ObstacleKind::Skyscraper, Vec2::new(500.0, GROUND_Y), 2.0));
        w.entities.push(Entity::cloud(2, Vec2::new(600.0, 400.0), 1.0));
        let sprites = w.sprites();
        assert_eq!(sprites.len(), 3);
        assert_eq!(sprites[0].sprite, Sprite::Cloud);
        assert_eq!(sprites[1].sprite, Sprite::Skyscraper);
        assert_eq!(sprites[2].sprite, Sprite::DinoRun1);
        assert_eq!(sprites[2].pos, w.player.pos);
    }

    #[test]
    fn test_drain_events_empties_buffer() {
        let mut w = world();
        w.push_event(GameEvent::Jumped);
        assert_eq!(w.drain_events(), vec![GameEvent::Jumped]);
        assert!(w.events().is_empty());
    }
}
