//! Summit Core - Math helpers and time keeping
//!
//! This crate provides the small foundations shared by the rest of the
//! workspace:
//! - Angle and interpolation helpers used by the character controller
//! - Fixed-timestep game time with an accumulator

pub mod math;
pub mod time;

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use math::{lerp_angle, move_toward, signed_angle, wrap_angle};
pub use time::{GameTime, TimeConfig};
