//! Fixed timestep driver
//!
//! Turns wall-clock samples into a whole number of simulation ticks. The tick
//! count only depends on the elapsed time since the baseline, never on how
//! that time was split across frames, so physics is independent of the
//! render rate. Large gaps (e.g. after a pause) run every owed tick; hosts
//! that want a cap clamp their clock before calling in.

use super::rng::RandomSource;
use super::state::World;
use super::tick::{TickInput, tick};
use crate::audio::AudioOut;
use crate::consts::SIM_HZ;

/// Slack for float error when converting elapsed seconds to ticks
const TICK_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct FixedStep {
    hz: f64,
    /// Wall time of the first frame after a reset
    origin: Option<f64>,
    /// Ticks executed since `origin`
    ticks_run: u64,
    /// Input waiting for the next tick
    pending: TickInput,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_HZ)
    }
}

impl FixedStep {
    pub fn new(hz: f64) -> Self {
        Self {
            hz,
            origin: None,
            ticks_run: 0,
            pending: TickInput::default(),
        }
    }

    /// Duration of one tick in seconds
    pub fn interval(&self) -> f64 {
        1.0 / self.hz
    }

    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Forget the baseline; the next `advance` re-anchors and runs no ticks
    pub fn reset(&mut self) {
        self.origin = None;
        self.ticks_run = 0;
        self.pending = TickInput::default();
    }

    /// Queue an input snapshot for the next tick
    ///
    /// Snapshots queued before a tick runs are merged; the first tick to run
    /// consumes them all.
    pub fn queue_input(&mut self, input: TickInput) {
        self.pending.merge(input);
    }

    /// Whole ticks owed at wall time `now` since the baseline
    fn ticks_due(&self, origin: f64, now: f64) -> u64 {
        let elapsed = now - origin;
        if elapsed <= 0.0 {
            return 0;
        }
        (elapsed * self.hz + TICK_EPSILON).floor() as u64
    }

    /// Run every tick owed at wall time `now` (seconds, monotonic)
    ///
    /// Returns the number of ticks executed. Runs nothing while the world is
    /// not running or on the first call after a reset, which only records
    /// the baseline.
    pub fn advance<R, A>(&mut self, now: f64, world: &mut World, rng: &mut R, audio: &mut A) -> u32
    where
        R: RandomSource + ?Sized,
        A: AudioOut + ?Sized,
    {
        if !world.is_running() {
            return 0;
        }
        let Some(origin) = self.origin else {
            self.origin = Some(now);
            return 0;
        };

        let due = self.ticks_due(origin, now);
        let mut executed = 0;
        while self.ticks_run < due && world.is_running() {
            let input = std::mem::take(&mut self.pending);
            tick(world, &input, rng, audio);
            self.ticks_run += 1;
            executed += 1;
        }
        if executed > 1 {
            log::trace!("Batched {} ticks in one frame", executed);
        }
        executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::consts::*;
    use crate::settings::Level;
    use crate::sim::rng::{PcgSource, ScriptedSource};
    use crate::sim::state::GamePhase;
    use proptest::prelude::*;

    fn world() -> World {
        World::new(WORLD_WIDTH, WORLD_HEIGHT, Level::Easy, PLAYER_X)
    }

    /// World that never spawns an obstacle, so every owed tick runs
    fn safe_world() -> World {
        let mut w = world();
        w.spawner.next_obstacle = u32::MAX;
        w
    }

    fn at(ticks: u64) -> f64 {
        ticks as f64 / SIM_HZ
    }

    #[test]
    fn test_first_call_only_anchors() {
        let mut driver = FixedStep::default();
        let mut w = world();
        let ran = driver.advance(5.0, &mut w, &mut ScriptedSource::default(), &mut SilentAudio);
        assert_eq!(ran, 0);
        assert_eq!(w.time_ticks, 0);
    }

    #[test]
    fn test_runs_whole_intervals_only() {
        let mut driver = FixedStep::default();
        let mut w = world();
        let mut rng = ScriptedSource::default();
        driver.advance(0.0, &mut w, &mut rng, &mut SilentAudio);
        assert_eq!(driver.advance(at(1) * 0.5, &mut w, &mut rng, &mut SilentAudio), 0);
        assert_eq!(driver.advance(at(1), &mut w, &mut rng, &mut SilentAudio), 1);
        assert_eq!(driver.advance(at(3) + at(1) * 0.9, &mut w, &mut rng, &mut SilentAudio), 2);
        assert_eq!(driver.advance(at(4), &mut w, &mut rng, &mut SilentAudio), 1);
        assert_eq!(w.time_ticks, 4);
    }

    #[test]
    fn test_large_gap_runs_every_owed_tick() {
        let mut driver = FixedStep::default();
        let mut w = safe_world();
        let mut rng = ScriptedSource::default();
        driver.advance(100.0, &mut w, &mut rng, &mut SilentAudio);
        let ran = driver.advance(105.0, &mut w, &mut rng, &mut SilentAudio);
        assert_eq!(ran, 600);
    }

    #[test]
    fn test_noop_when_not_running() {
        let mut driver = FixedStep::default();
        let mut w = world();
        let mut rng = ScriptedSource::default();
        driver.advance(0.0, &mut w, &mut rng, &mut SilentAudio);
        w.phase = GamePhase::GameOver;
        assert_eq!(driver.advance(1.0, &mut w, &mut rng, &mut SilentAudio), 0);
        assert_eq!(w.time_ticks, 0);
    }

    #[test]
    fn test_reset_reanchors() {
        let mut driver = FixedStep::default();
        let mut w = world();
        let mut rng = ScriptedSource::default();
        driver.advance(0.0, &mut w, &mut rng, &mut SilentAudio);
        driver.advance(at(2), &mut w, &mut rng, &mut SilentAudio);
        driver.reset();
        assert_eq!(driver.advance(50.0, &mut w, &mut rng, &mut SilentAudio), 0);
        assert_eq!(driver.advance(50.0 + at(1), &mut w, &mut rng, &mut SilentAudio), 1);
    }

    #[test]
    fn test_input_consumed_by_one_tick() {
        let mut driver = FixedStep::default();
        let mut w = world();
        let mut rng = ScriptedSource::default();
        driver.advance(0.0, &mut w, &mut rng, &mut SilentAudio);
        // Queued between ticks: kept until a tick runs
        driver.queue_input(TickInput::press());
        assert_eq!(driver.advance(at(1) * 0.5, &mut w, &mut rng, &mut SilentAudio), 0);
        assert_eq!(driver.advance(at(3), &mut w, &mut rng, &mut SilentAudio), 3);
        assert!(w.player.is_airborne());
        // Launched on the first tick, gravity applied on all three
        assert_eq!(w.player.velocity, JUMP_VELOCITY + 3.0 * GRAVITY);
    }

    #[test]
    fn test_batching_three_at_once_matches_one_by_one() {
        let mut rng_a = PcgSource::seeded(7);
        let mut rng_b = PcgSource::seeded(7);
        let (mut a, mut b) = (world(), world());
        let (mut da, mut db) = (FixedStep::default(), FixedStep::default());

        da.advance(0.0, &mut a, &mut rng_a, &mut SilentAudio);
        for k in 1..=3 {
            da.advance(at(k), &mut a, &mut rng_a, &mut SilentAudio);
        }
        db.advance(0.0, &mut b, &mut rng_b, &mut SilentAudio);
        db.advance(at(3), &mut b, &mut rng_b, &mut SilentAudio);

        assert_eq!(a.time_ticks, 3);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_batching_is_deterministic(
            seed in any::<u64>(),
            chunks in proptest::collection::vec(1u64..20, 1..30),
        ) {
            let total: u64 = chunks.iter().sum();
            let mut rng_a = PcgSource::seeded(seed);
            let mut rng_b = PcgSource::seeded(seed);
            let (mut a, mut b) = (safe_world(), safe_world());
            let (mut da, mut db) = (FixedStep::default(), FixedStep::default());

            // One frame per tick
            da.advance(0.0, &mut a, &mut rng_a, &mut SilentAudio);
            for k in 1..=total {
                da.advance(at(k), &mut a, &mut rng_a, &mut SilentAudio);
            }

            // Irregular frames
            db.advance(0.0, &mut b, &mut rng_b, &mut SilentAudio);
            let mut elapsed = 0;
            for chunk in chunks {
                elapsed += chunk;
                db.advance(at(elapsed), &mut b, &mut rng_b, &mut SilentAudio);
            }

            prop_assert_eq!(a.time_ticks, total);
            prop_assert_eq!(a, b);
        }
    }
}
