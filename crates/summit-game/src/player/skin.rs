//! Skin (visual mesh) orientation
//!
//! The skin yaw chases the movement direction instead of snapping to it, and
//! small inputs do not disturb the remembered facing.

use glam::{Quat, Vec3};
use summit_core::math::{lerp_angle, signed_angle};

/// Movement direction magnitude below which the facing is left alone.
/// Hysteresis filter: tiny stick noise must not make the skin jitter.
const FACING_THRESHOLD: f32 = 0.2;

/// Reference "back" vector the yaw is measured from (model faces -Z).
const BACK: Vec3 = Vec3::Z;

/// Smoothly rotating skin yaw
#[derive(Debug, Clone)]
pub struct SkinRotation {
    /// Current yaw in radians
    pub yaw: f32,
    /// Angular lerp weight per second
    pub rotation_speed: f32,
    /// Last movement direction that exceeded the facing threshold
    facing: Vec3,
}

impl SkinRotation {
    /// Create a skin rotation with the given turn rate
    pub fn new(rotation_speed: f32) -> Self {
        Self {
            yaw: 0.0,
            rotation_speed,
            facing: BACK,
        }
    }

    /// Advance the yaw towards the current movement direction
    pub fn update(&mut self, move_dir: Vec3, dt: f32) {
        if move_dir.length() > FACING_THRESHOLD {
            self.facing = move_dir;
        }

        let target_yaw = signed_angle(BACK, self.facing, Vec3::Y);
        self.yaw = lerp_angle(self.yaw, target_yaw, self.rotation_speed * dt);
    }

    /// The direction the skin is currently turning towards
    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    /// Rotation quaternion for the skin transform
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Snap the yaw to the remembered facing without interpolation
    pub fn snap_to_facing(&mut self) {
        self.yaw = signed_angle(BACK, self.facing, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_yaw_approaches_target() {
        let mut skin = SkinRotation::new(12.0);

        // Run towards +X; target yaw is +90 degrees from the back vector
        for _ in 0..240 {
            skin.update(Vec3::X, DT);
        }
        assert!((skin.yaw - FRAC_PI_2).abs() < 1e-2);
    }

    #[test]
    fn test_small_input_keeps_facing() {
        let mut skin = SkinRotation::new(12.0);
        for _ in 0..120 {
            skin.update(Vec3::X, DT);
        }
        let facing_before = skin.facing();

        // Sub-threshold wiggle in another direction must not steal the facing
        skin.update(Vec3::new(0.0, 0.0, 0.1), DT);
        assert_eq!(skin.facing(), facing_before);
    }

    #[test]
    fn test_turnaround_takes_shortest_path() {
        let mut skin = SkinRotation::new(12.0);
        skin.facing = Vec3::new(-0.1, 0.0, -1.0).normalize();
        skin.snap_to_facing();
        let start = skin.yaw;

        // Flip to a direction just across the +/-PI seam
        skin.update(Vec3::new(0.1, 0.0, -1.0).normalize(), DT);
        // One step of a shortest-path lerp moves a little, not almost 2*PI
        assert!((skin.yaw - start).abs() < 0.5);
    }

    #[test]
    fn test_zero_input_holds_yaw_target() {
        let mut skin = SkinRotation::new(12.0);
        for _ in 0..240 {
            skin.update(Vec3::X, DT);
        }
        let yaw = skin.yaw;

        // Stopping (zero direction) keeps turning toward the remembered
        // facing rather than resetting
        for _ in 0..60 {
            skin.update(Vec3::ZERO, DT);
        }
        assert!((skin.yaw - FRAC_PI_2).abs() <= (yaw - FRAC_PI_2).abs() + 1e-6);
    }
}
