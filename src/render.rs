//! Render-facing view of the simulation
//!
//! The core never touches a display surface. Hosts read a list of sprite
//! instances once per rendered frame and draw them however they like.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sprite identifiers understood by the host's texture atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    DinoRun1,
    DinoRun2,
    DinoRun3,
    DinoJump,
    Cloud,
    Skyscraper,
    NuclearSilo,
    PhoneTower,
}

impl Sprite {
    /// Atlas key for this sprite
    pub fn atlas_key(&self) -> &'static str {
        match self {
            Sprite::DinoRun1 => "dino-run-1",
            Sprite::DinoRun2 => "dino-run-2",
            Sprite::DinoRun3 => "dino-run-3",
            Sprite::DinoJump => "dino-jump",
            Sprite::Cloud => "cloud",
            Sprite::Skyscraper => "skyscraper",
            Sprite::NuclearSilo => "nuclear-silo",
            Sprite::PhoneTower => "phone-tower",
        }
    }
}

/// One sprite to draw this frame (bottom-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteInstance {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: Sprite,
}
