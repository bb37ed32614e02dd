//! Audio collaborator boundary
//!
//! The simulation only ever fires named cues and moves on. Whatever plays
//! them implements [`AudioSink`]; a missing or broken backend is invisible
//! to the game.

use serde::{Deserialize, Serialize};

use crate::settings::AudioSettings;
use crate::sim::SizeClass;

/// Sound cue names understood by audio backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player fired a shot
    Fire,
    /// Small obstacle destroyed
    ExplosionSmall,
    /// Medium obstacle destroyed
    ExplosionMedium,
    /// Large obstacle destroyed, or the player was hit
    ExplosionLarge,
}

impl SoundCue {
    /// Explosion cue for an obstacle of the given size
    pub fn explosion(size: SizeClass) -> Self {
        match size {
            SizeClass::Small => SoundCue::ExplosionSmall,
            SizeClass::Medium => SoundCue::ExplosionMedium,
            SizeClass::Large => SoundCue::ExplosionLarge,
        }
    }

    /// Backend-facing cue name
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Fire => "fire",
            SoundCue::ExplosionSmall => "explosion_small",
            SoundCue::ExplosionMedium => "explosion_medium",
            SoundCue::ExplosionLarge => "explosion_large",
        }
    }
}

/// Receives fire-and-forget cues. Implementations must not block.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Drops every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Keeps every cue in order (headless runs and tests)
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    pub cues: Vec<SoundCue>,
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

/// Audio manager for the game: applies volume settings and hands cues to a
/// backend. Without a backend it only logs.
pub struct AudioManager {
    settings: AudioSettings,
    backend: Option<Box<dyn AudioSink>>,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(AudioSettings::default())
    }
}

impl AudioManager {
    pub fn new(settings: AudioSettings) -> Self {
        Self {
            settings,
            backend: None,
            played: 0,
        }
    }

    /// Attach a playback backend
    pub fn with_backend(mut self, backend: Box<dyn AudioSink>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.settings.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Cues that were audible when fired
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.settings.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        match self.backend.as_mut() {
            Some(backend) => backend.play(cue),
            None => log::trace!("cue {} at volume {:.2}", cue.name(), vol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundCue::Fire.name(), "fire");
        assert_eq!(SoundCue::explosion(SizeClass::Small).name(), "explosion_small");
        assert_eq!(SoundCue::explosion(SizeClass::Medium).name(), "explosion_medium");
        assert_eq!(SoundCue::explosion(SizeClass::Large).name(), "explosion_large");
    }

    #[test]
    fn test_muted_manager_swallows_cues() {
        let mut audio = AudioManager::default();
        audio.set_muted(true);
        audio.play(SoundCue::Fire);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.play(SoundCue::Fire);
        audio.play(SoundCue::ExplosionSmall);
        assert_eq!(audio.played(), 2);
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(0.0);
        audio.play(SoundCue::ExplosionLarge);
        assert_eq!(audio.played(), 0);
    }
}
