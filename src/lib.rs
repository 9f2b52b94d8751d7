//! Runivy - a side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, fixed timestep)
//! - `game`: Facade wiring the simulation to its injected collaborators
//! - `audio`: Sound effect identifiers and the audio output capability
//! - `render`: Sprite identifiers and per-frame sprite lists for hosts
//! - `settings`: Serializable configuration and level selection

pub mod audio;
pub mod game;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{ConfigError, Level, Settings};

/// Game configuration constants
///
/// Distances are in world units (pixels at 1:1 scale), velocities in units
/// per tick.
pub mod consts {
    /// Fixed simulation frequency (ticks per second)
    pub const SIM_HZ: f64 = 120.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / SIM_HZ;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Vertical acceleration applied every tick
    pub const GRAVITY: f32 = -0.25;
    /// Ground level: the player never rests below this
    pub const GROUND_Y: f32 = 104.0;
    /// Vertical velocity at jump launch
    pub const JUMP_VELOCITY: f32 = 10.0;
    /// Releasing the jump early clamps upward velocity to this
    pub const JUMP_RELEASE_CAP: f32 = 4.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Ticks each run sprite is held before advancing
    pub const TICKS_PER_RUN_SPRITE: u32 = 9;

    /// Spawn interval bounds in ticks (inclusive)
    pub const SPAWN_INTERVAL_MIN: i32 = 120;
    pub const SPAWN_INTERVAL_MAX: i32 = 360;

    /// Clouds spawn this far below the top of the world (inclusive)
    pub const CLOUD_DROP_MIN: i32 = 100;
    pub const CLOUD_DROP_MAX: i32 = 400;
    /// Cloud speed bounds (inclusive)
    pub const CLOUD_SPEED_MIN: i32 = 1;
    pub const CLOUD_SPEED_MAX: i32 = 4;
    pub const CLOUD_WIDTH: f32 = 128.0;
    pub const CLOUD_HEIGHT: f32 = 64.0;

    /// Ground texture scroll per tick
    pub const GROUND_SCROLL_PER_TICK: f32 = 2.0;
}
