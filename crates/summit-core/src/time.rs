//! Fixed-timestep time keeping
//!
//! The game loop feeds raw frame deltas into [`GameTime`]; physics code asks
//! how many fixed steps to run this frame.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Fixed timestep for physics (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since game start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped)
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the game is paused
    pub paused: bool,
    /// Accumulated time for fixed timestep
    fixed_accumulator: f32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            config: TimeConfig::default(),
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            paused: false,
            fixed_accumulator: 0.0,
        }
    }
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the game time with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = raw_delta.min(self.config.max_delta_time);
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep {
            self.fixed_accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        steps
    }

    /// Get the interpolation factor for rendering between physics steps
    pub fn fixed_interpolation(&self) -> f32 {
        self.fixed_accumulator / self.config.fixed_timestep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_steps() {
        // Power-of-two timestep so the accumulator arithmetic is exact
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.25,
            max_delta_time: 1.0,
        });

        time.update(0.625);
        assert_eq!(time.fixed_steps(), 2);

        // Leftover 0.125 accumulates into the next frame
        time.update(0.125);
        assert_eq!(time.fixed_steps(), 1);
        assert_eq!(time.fixed_steps(), 0);
    }

    #[test]
    fn test_delta_clamping() {
        let mut time = GameTime::default();
        time.update(10.0);
        assert_eq!(time.delta_time, time.config.max_delta_time);
    }

    #[test]
    fn test_paused_time_does_not_advance() {
        let mut time = GameTime::default();
        time.paused = true;
        time.update(1.0);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.total_time, 0.0);
        assert_eq!(time.fixed_steps(), 0);
    }
}
