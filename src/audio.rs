//! Audio output capability
//!
//! The simulation never owns an audio device. It is handed something that can
//! play a sound and report whether a sound is still playing; hosts bind that
//! to whatever backend they have.

use crate::settings::Settings;

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Jump roars (one picked at random per jump)
    Roar1,
    Roar2,
    Roar3,
    /// Background music loop
    Music,
}

impl SoundEffect {
    /// Asset path for this sound
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Roar1 => "data/roar1.wav",
            SoundEffect::Roar2 => "data/roar2.mp3",
            SoundEffect::Roar3 => "data/roar3.wav",
            SoundEffect::Music => "data/music.mp3",
        }
    }
}

/// Pool the jump roar is chosen from
pub const ROAR_POOL: [SoundEffect; 3] = [SoundEffect::Roar1, SoundEffect::Roar2, SoundEffect::Roar3];

/// Fire-and-forget sound output
pub trait AudioOut {
    /// Start playing a sound from the beginning
    fn play(&mut self, effect: SoundEffect);
    /// Whether the sound is currently playing
    fn is_playing(&self, effect: SoundEffect) -> bool;
}

/// Backend that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioOut for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}

    fn is_playing(&self, _effect: SoundEffect) -> bool {
        false
    }
}

/// Audio manager for the game
///
/// Wraps a backend and applies the player's music/effects preferences.
pub struct AudioManager<B: AudioOut> {
    backend: B,
    music_enabled: bool,
    sfx_enabled: bool,
    muted: bool,
}

impl<B: AudioOut> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            music_enabled: settings.music,
            sfx_enabled: settings.sound_effects,
            muted: false,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Start the music loop if enabled and not already playing
    ///
    /// Looping itself is the backend's job.
    pub fn start_music(&mut self) {
        if self.muted || !self.music_enabled {
            return;
        }
        if !self.backend.is_playing(SoundEffect::Music) {
            log::info!("Starting music");
            self.backend.play(SoundEffect::Music);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: AudioOut> AudioOut for AudioManager<B> {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let enabled = match effect {
            SoundEffect::Music => self.music_enabled,
            _ => self.sfx_enabled,
        };
        if enabled {
            self.backend.play(effect);
        }
    }

    fn is_playing(&self, effect: SoundEffect) -> bool {
        self.backend.is_playing(effect)
    }
}

/// Backend that records every play request, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingAudio {
    pub played: Vec<SoundEffect>,
    /// Sounds reported as still playing
    pub playing: Vec<SoundEffect>,
}

#[cfg(test)]
impl AudioOut for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn is_playing(&self, effect: SoundEffect) -> bool {
        self.playing.contains(&effect)
    }
}
