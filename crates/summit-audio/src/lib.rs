//! Summit Audio - Sound effect playback using kira
//!
//! Provides the one-shot feedback sounds (jump, landing) the character
//! controller reports each step.

mod config;
mod error;
mod manager;
mod sfx;

pub use config::AudioConfig;
pub use error::AudioError;
pub use manager::AudioEngine;
