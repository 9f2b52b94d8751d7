//! Runivy entry point
//!
//! Native builds run a headless autoplay session against the wall clock:
//! a simple policy presses jump when an obstacle gets close, and the run is
//! reported through the log. Set `RUST_LOG=info` (or `debug`) to see it.
//!
//! Usage: `runivy [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use runivy::audio::{AudioManager, SilentAudio};
    use runivy::sim::{GameEvent, TickInput, World};
    use runivy::{Game, Settings};

    /// Render rate of the headless host
    const FRAME_TIME: Duration = Duration::from_micros(16_667);
    /// Give up after this long even if the autopilot survives
    const MAX_SESSION: Duration = Duration::from_secs(60);

    /// Press jump once the nearest obstacle ahead is within reach
    fn autopilot(world: &World, holding: bool) -> TickInput {
        let player = world.player.bounds();
        let lead = world.obstacle_speed() * 22.0;
        let threat = world
            .obstacles()
            .map(|e| e.pos.x - player.max.x)
            .filter(|gap| *gap >= 0.0)
            .fold(f32::INFINITY, f32::min);

        if !world.player.is_airborne() && threat <= lead {
            TickInput::press()
        } else if holding && world.player.is_airborne() && world.player.velocity <= 0.0 {
            TickInput::release()
        } else {
            TickInput::default()
        }
    }

    pub fn run() {
        env_logger::init();

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load(Path::new(&path)),
            None => Settings::default(),
        };
        log::info!("Runivy (headless) starting on {} level", settings.level);

        let mut audio = AudioManager::new(SilentAudio, &settings);
        audio.start_music();
        let mut game = Game::with_settings(&settings, audio);

        let start = Instant::now();
        let mut holding = false;
        let mut frames = 0u64;
        let mut ticks = 0u64;
        while start.elapsed() < MAX_SESSION {
            let input = autopilot(game.world(), holding);
            if input.jump_pressed {
                holding = true;
            }
            if input.jump_released {
                holding = false;
            }

            ticks += u64::from(game.frame(start.elapsed().as_secs_f64(), input));
            frames += 1;

            for event in game.drain_events() {
                match event {
                    GameEvent::ObstaclePassed { score } => log::info!("Score: {}", score),
                    GameEvent::GameOver { score } => log::info!("Game over! Final score: {}", score),
                    GameEvent::Jumped => log::debug!("Jump"),
                }
            }
            if !game.is_running() {
                break;
            }
            log::trace!("Frame {}: {} sprites", frames, game.sprites().len());
            std::thread::sleep(FRAME_TIME);
        }

        log::info!(
            "Session over: {} frames, {} ticks, score {}, best {}",
            frames,
            ticks,
            game.score(),
            game.best_score()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `runivy::Game` directly; nothing to do here
}
