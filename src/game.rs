//! Game facade
//!
//! Owns the world and the fixed-step driver, plus the collaborators the
//! simulation needs (random source, audio output). Hosts construct it once,
//! feed it one wall-clock sample and input snapshot per rendered frame, and
//! read sprites/score/events back.

use crate::audio::AudioOut;
use crate::render::SpriteInstance;
use crate::settings::{ConfigError, Level, Settings};
use crate::sim::{FixedStep, GameEvent, PcgSource, RandomSource, TickInput, World};

pub struct Game<R: RandomSource, A: AudioOut> {
    world: World,
    driver: FixedStep,
    rng: R,
    audio: A,
    /// Best score across runs this session
    best_score: u64,
}

impl<A: AudioOut> Game<PcgSource, A> {
    /// Game with a PCG random source, seeded from settings when a seed is set
    pub fn with_settings(settings: &Settings, audio: A) -> Self {
        Self::new(settings, PcgSource::from_seed_option(settings.seed), audio)
    }
}

impl<R: RandomSource, A: AudioOut> Game<R, A> {
    pub fn new(settings: &Settings, rng: R, audio: A) -> Self {
        log::info!(
            "New game: {}x{} world, {} level, {} Hz",
            settings.world_width,
            settings.world_height,
            settings.level,
            settings.tick_hz
        );
        Self {
            world: World::from_settings(settings),
            driver: FixedStep::new(settings.tick_hz),
            rng,
            audio,
            best_score: 0,
        }
    }

    /// Choose the level for the current run
    ///
    /// Only allowed before the run's first tick.
    pub fn set_level(&mut self, level: Level) -> Result<(), ConfigError> {
        if self.world.time_ticks > 0 {
            return Err(ConfigError::LevelLocked);
        }
        self.world.level = level;
        log::info!("Level set to {}", level);
        Ok(())
    }

    /// Choose the level by name ("easy", "medium", "hard")
    pub fn set_level_by_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let level = name.parse::<Level>()?;
        self.set_level(level)
    }

    /// Start a new run (also used for "play again")
    pub fn reset(&mut self) {
        self.record_best();
        self.world.reset();
        self.driver.reset();
    }

    /// Process one rendered frame
    ///
    /// `now` is a monotonic wall-clock time in seconds. Returns the number of
    /// simulation ticks executed.
    pub fn frame(&mut self, now: f64, input: TickInput) -> u32 {
        if !self.world.is_running() {
            return 0;
        }
        self.driver.queue_input(input);
        let ticks = self
            .driver
            .advance(now, &mut self.world, &mut self.rng, &mut self.audio);
        if !self.world.is_running() {
            self.record_best();
        }
        ticks
    }

    fn record_best(&mut self) {
        if self.world.score > self.best_score {
            self.best_score = self.world.score;
            log::info!("New best score: {}", self.best_score);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score.max(self.world.score)
    }

    pub fn level(&self) -> Level {
        self.world.level
    }

    /// Ground scroll offset for the host's tiled ground texture
    pub fn scroll(&self) -> f32 {
        self.world.scroll
    }

    pub fn sprites(&self) -> Vec<SpriteInstance> {
        self.world.sprites()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world.drain_events()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
