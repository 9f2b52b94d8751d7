//! Random sources for spawning and sound selection
//!
//! The simulation only ever asks for a uniform integer in an inclusive range,
//! so that is the whole capability. Production uses PCG; tests and replays
//! substitute a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer source
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`. Returns `lo` when `hi <= lo`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;
}

/// Pick a uniform index into a collection of `len` items
///
/// `len` must be non-zero. The result is clamped so a misbehaving source can
/// never produce an out-of-range index.
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let hi = len.saturating_sub(1).min(i32::MAX as usize) as i32;
    let idx = rng.range_inclusive(0, hi).clamp(0, hi);
    idx as usize
}

/// PCG-backed source
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg32,
}

impl PcgSource {
    /// Unseeded source: different every run
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// Seeded source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for PcgSource {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Deterministic source replaying a fixed sequence
///
/// Each scripted value is an offset from `lo`, wrapped into the requested
/// range, so `0` always yields the lower bound. The sequence repeats once
/// exhausted; an empty script always yields `lo`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if self.values.is_empty() || hi <= lo {
            self.cursor += 1;
            return lo;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        let span = i64::from(hi) - i64::from(lo) + 1;
        (i64::from(lo) + i64::from(raw).rem_euclid(span)) as i32
    }
}
