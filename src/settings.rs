//! Game settings with persistence
//!
//! Settings are saved to `~/.config/summit/settings.toml`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use summit_audio::AudioConfig;
use summit_game::TuningParameters;
use tracing::{info, warn};

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSettings {
    pub audio: AudioSettings,
    pub gameplay: GameplaySettings,
    pub movement: TuningParameters,
}

/// Audio volume settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master volume (0.0–1.0)
    pub master_volume: f64,
    /// Sound effects volume (0.0–1.0)
    pub sfx_volume: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
        }
    }
}

impl AudioSettings {
    /// Convert to the audio engine's config type
    pub fn to_config(&self) -> AudioConfig {
        AudioConfig {
            master_volume: self.master_volume,
            sfx_volume: self.sfx_volume,
        }
    }
}

/// Gameplay and input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplaySettings {
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert the mouse Y axis
    pub invert_y: bool,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            invert_y: false,
        }
    }
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("summit"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join("settings.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_round_trip() {
        let settings = GameSettings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: GameSettings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.audio.master_volume, settings.audio.master_volume);
        assert_eq!(parsed.movement.move_speed, settings.movement.move_speed);
        assert_eq!(
            parsed.gameplay.mouse_sensitivity,
            settings.gameplay.mouse_sensitivity
        );
    }
}
