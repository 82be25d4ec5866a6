use std::path::Path;

use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use tracing::info;

use crate::config::AudioConfig;
use crate::error::AudioError;
use crate::sfx::SfxPlayer;

/// The audio engine. Wraps kira's AudioManager and plays one-shot
/// feedback sounds for the character controller.
pub struct AudioEngine {
    manager: AudioManager<DefaultBackend>,
    sfx: SfxPlayer,
    config: AudioConfig,
}

impl AudioEngine {
    /// Create a new AudioEngine with the given config.
    pub fn new(config: AudioConfig) -> Result<Self, AudioError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AudioError::InitFailed(e.to_string()))?;

        info!("Audio engine initialized");

        Ok(Self {
            manager,
            sfx: SfxPlayer::new(config.effective_sfx_volume()),
            config,
        })
    }

    /// Create an AudioEngine with default configuration.
    pub fn with_default() -> Result<Self, AudioError> {
        Self::new(AudioConfig::default())
    }

    /// Apply new volume settings at runtime.
    pub fn update_volumes(&mut self, config: AudioConfig) {
        self.sfx.set_volume(config.effective_sfx_volume());
        self.config = config;
    }

    /// Play a one-shot sound effect.
    pub fn play_sfx(&mut self, path: &Path) -> Result<(), AudioError> {
        self.sfx.play(&mut self.manager, path)
    }

    /// Call each frame to clean up finished sounds.
    pub fn update(&mut self) {
        self.sfx.cleanup();
    }

    /// Get a reference to the current audio config.
    pub fn config(&self) -> &AudioConfig {
        &self.config
    }
}
