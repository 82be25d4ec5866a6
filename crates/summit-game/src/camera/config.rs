//! Camera configuration

use serde::{Deserialize, Serialize};

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitCameraConfig {
    /// Minimum orbit distance
    pub min_distance: f32,
    /// Maximum orbit distance
    pub max_distance: f32,
    /// Zoom speed (scroll sensitivity)
    pub zoom_speed: f32,
    /// Zoom interpolation smoothing (0-1, lower = smoother)
    pub zoom_smoothing: f32,
    /// Mouse sensitivity (radians per pixel)
    pub sensitivity: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Collision radius for camera backoff
    pub collision_radius: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: 12.0,
            zoom_speed: 2.0,
            zoom_smoothing: 0.15,
            sensitivity: 0.003,
            pitch_min: -75.0,
            pitch_max: 60.0,
            collision_radius: 0.3,
        }
    }
}
