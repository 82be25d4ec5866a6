use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kira::manager::backend::DefaultBackend;
use kira::manager::AudioManager;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings};
use kira::sound::PlaybackState;

use crate::error::AudioError;

/// Manages fire-and-forget sound effects with basic caching.
pub struct SfxPlayer {
    cache: HashMap<PathBuf, StaticSoundData>,
    active: Vec<StaticSoundHandle>,
    sfx_volume: f64,
}

impl SfxPlayer {
    pub fn new(sfx_volume: f64) -> Self {
        Self {
            cache: HashMap::new(),
            active: Vec::new(),
            sfx_volume,
        }
    }

    /// Play a one-shot sound effect at the configured volume.
    pub fn play(
        &mut self,
        manager: &mut AudioManager<DefaultBackend>,
        path: &Path,
    ) -> Result<(), AudioError> {
        let data = self.load_or_cache(path)?;
        let settings = StaticSoundSettings::new().volume(self.sfx_volume);
        let data = data.with_settings(settings);
        let handle = manager
            .play(data)
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        self.active.push(handle);
        Ok(())
    }

    /// Update the volume used for subsequent sounds.
    pub fn set_volume(&mut self, volume: f64) {
        self.sfx_volume = volume;
    }

    /// Remove handles for sounds that have stopped playing.
    pub fn cleanup(&mut self) {
        self.active.retain(|h| h.state() != PlaybackState::Stopped);
    }

    fn load_or_cache(&mut self, path: &Path) -> Result<StaticSoundData, AudioError> {
        if let Some(data) = self.cache.get(path) {
            return Ok(data.clone());
        }
        let data = StaticSoundData::from_file(path)
            .map_err(|e| AudioError::LoadFailed(path.to_path_buf(), e.to_string()))?;
        self.cache.insert(path.to_path_buf(), data.clone());
        Ok(data)
    }
}
