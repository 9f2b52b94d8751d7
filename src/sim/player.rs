//! Player controller: jump physics and run animation
//!
//! The player never moves horizontally. Vertically it is either resting on
//! the ground or airborne under constant gravity. Holding jump gives the full
//! launch velocity; releasing early caps the remaining climb for a short hop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::rng::{RandomSource, pick_index};
use crate::audio::{AudioOut, ROAR_POOL};
use crate::consts::*;
use crate::render::{Sprite, SpriteInstance};

/// Run cycle, each entry held for `TICKS_PER_RUN_SPRITE` ticks
pub const RUN_CYCLE: [Sprite; 4] = [
    Sprite::DinoRun1,
    Sprite::DinoRun2,
    Sprite::DinoRun3,
    Sprite::DinoRun2,
];

/// Length of one full run cycle in ticks
pub const RUN_CYCLE_TICKS: u32 = TICKS_PER_RUN_SPRITE * RUN_CYCLE.len() as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Grounded,
    Airborne,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units per tick, up is positive)
    pub velocity: f32,
    pub state: PlayerState,
    /// Run animation tick counter in `[0, RUN_CYCLE_TICKS)`
    pub anim_frame: u32,
}

impl Player {
    /// Create a grounded player at horizontal position `x`
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity: 0.0,
            state: PlayerState::Grounded,
            anim_frame: 0,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.state == PlayerState::Airborne
    }

    /// Launch a jump from the ground
    ///
    /// Plays a random roar unless one is already playing. Returns whether a
    /// jump actually started; airborne players are left untouched.
    pub fn begin_jump<R, A>(&mut self, rng: &mut R, audio: &mut A) -> bool
    where
        R: RandomSource + ?Sized,
        A: AudioOut + ?Sized,
    {
        if self.is_airborne() {
            return false;
        }
        self.velocity = JUMP_VELOCITY;
        self.state = PlayerState::Airborne;

        if !ROAR_POOL.iter().any(|roar| audio.is_playing(*roar)) {
            let roar = ROAR_POOL[pick_index(rng, ROAR_POOL.len())];
            audio.play(roar);
        }
        true
    }

    /// Jump button released: cap the remaining upward velocity
    pub fn release_jump_early(&mut self) {
        if self.velocity > JUMP_RELEASE_CAP {
            self.velocity = JUMP_RELEASE_CAP;
        }
    }

    /// Apply one tick of velocity and gravity
    pub fn integrate(&mut self, gravity: f32) {
        self.pos.y += self.velocity;
        self.velocity += gravity;
    }

    /// Snap to the ground if the player fell below it
    pub fn land_check(&mut self, ground_y: f32) {
        if self.pos.y < ground_y {
            self.land(ground_y);
        }
    }

    fn land(&mut self, ground_y: f32) {
        self.pos.y = ground_y;
        self.velocity = 0.0;
        self.state = PlayerState::Grounded;
    }

    /// Advance the run animation one tick (grounded only)
    ///
    /// Purely cosmetic: never feeds back into physics.
    pub fn step_animation(&mut self) {
        if !self.is_airborne() {
            self.anim_frame = (self.anim_frame + 1) % RUN_CYCLE_TICKS;
        }
    }

    /// Sprite for the current state
    pub fn sprite(&self) -> Sprite {
        match self.state {
            PlayerState::Airborne => Sprite::DinoJump,
            PlayerState::Grounded => {
                let idx = (self.anim_frame / TICKS_PER_RUN_SPRITE) as usize % RUN_CYCLE.len();
                RUN_CYCLE[idx]
            }
        }
    }

    pub fn sprite_instance(&self) -> SpriteInstance {
        SpriteInstance {
            pos: self.pos,
            size: self.size,
            sprite: self.sprite(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Back to rest on the ground (restart)
    pub fn reset(&mut self) {
        self.land(GROUND_Y);
        self.anim_frame = 0;
    }
}
