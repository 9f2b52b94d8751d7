//! Game settings and level selection
//!
//! Settings are plain JSON; missing fields fall back to defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors at the configuration boundary
#[derive(Debug)]
pub enum ConfigError {
    /// Level name not one of easy/medium/hard
    UnknownLevel(String),
    /// Level can only change before the first tick of a game
    LevelLocked,
    /// Settings value out of range
    Invalid(&'static str),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownLevel(name) => write!(f, "unknown level '{}'", name),
            ConfigError::LevelLocked => write!(f, "level cannot change after the game has started"),
            ConfigError::Invalid(what) => write!(f, "invalid settings: {}", what),
            ConfigError::Io(e) => write!(f, "settings I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }

    /// Scroll speed (units per tick) of obstacles at this level
    pub fn obstacle_speed(&self) -> f32 {
        match self {
            Level::Easy => 2.0,
            Level::Medium => 4.0,
            Level::Hard => 6.0,
        }
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            _ => Err(ConfigError::UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world_width: f32,
    pub world_height: f32,
    /// Level applied before the first tick
    pub level: Level,
    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_hz: f64,
    /// Player's horizontal position
    pub player_x: f32,

    // === Audio ===
    pub music: bool,
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            level: Level::Easy,
            seed: None,
            tick_hz: SIM_HZ,
            player_x: PLAYER_X,
            music: true,
            sound_effects: true,
        }
    }
}

impl Settings {
    /// Check values the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width > 0.0 && self.world_width.is_finite()) {
            return Err(ConfigError::Invalid("world_width must be positive"));
        }
        if !(self.world_height > 0.0 && self.world_height.is_finite()) {
            return Err(ConfigError::Invalid("world_height must be positive"));
        }
        if !(self.tick_hz > 0.0 && self.tick_hz.is_finite()) {
            return Err(ConfigError::Invalid("tick_hz must be positive"));
        }
        if !(self.player_x >= 0.0 && self.player_x < self.world_width) {
            return Err(ConfigError::Invalid("player_x must lie inside the world"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
