/// Audio volume configuration. Maps to the audio section of the game settings.
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// Master volume multiplier (0.0–1.0).
    pub master_volume: f64,
    /// Sound effects volume multiplier (0.0–1.0).
    pub sfx_volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
        }
    }
}

impl AudioConfig {
    /// Effective SFX volume (master * sfx).
    pub fn effective_sfx_volume(&self) -> f64 {
        self.master_volume * self.sfx_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_volumes() {
        let config = AudioConfig::default();
        assert_eq!(config.master_volume, 1.0);
        assert_eq!(config.sfx_volume, 1.0);
    }

    #[test]
    fn effective_volume() {
        let config = AudioConfig {
            master_volume: 0.5,
            sfx_volume: 0.8,
        };
        assert!((config.effective_sfx_volume() - 0.4).abs() < f64::EPSILON);
    }
}
