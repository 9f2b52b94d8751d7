//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same random source output and the
//! same input snapshots, the simulation produces the same state:
//! - Fixed timestep only
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (entities kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod entity;
pub mod player;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use driver::FixedStep;
pub use entity::{Entity, EntityKind, ObstacleKind};
pub use player::{Player, PlayerState};
pub use rng::{PcgSource, RandomSource, ScriptedSource, pick_index};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, World};
pub use tick::{TickInput, tick};
