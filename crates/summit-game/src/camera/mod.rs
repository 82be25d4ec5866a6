//! Orbit camera module
//!
//! Third-person camera that orbits the player with mouse look, scroll zoom,
//! and raycast-based collision backoff.

mod config;
mod controller;

pub use config::OrbitCameraConfig;
pub use controller::OrbitCamera;
