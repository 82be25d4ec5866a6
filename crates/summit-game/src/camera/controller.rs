//! Orbit camera with mouse look and zoom

use glam::{Mat4, Quat, Vec2, Vec3};
use rapier3d::prelude::QueryFilter;
use summit_physics::PhysicsWorld;

use crate::input::InputState;

use super::OrbitCameraConfig;

/// Third-person orbit camera
pub struct OrbitCamera {
    /// Configuration
    pub config: OrbitCameraConfig,
    /// Yaw rotation in radians (horizontal, unclamped)
    pub yaw: f32,
    /// Pitch rotation in radians (vertical, clamped)
    pub pitch: f32,
    /// Target zoom distance (for smooth interpolation)
    target_distance: f32,
    /// Current interpolated zoom distance
    current_distance: f32,
    /// Camera world position (computed each step)
    position: Vec3,
    /// Pivot position we orbit around
    pivot: Vec3,
}

impl OrbitCamera {
    /// Create a new orbit camera
    pub fn new() -> Self {
        Self::with_config(OrbitCameraConfig::default())
    }

    /// Create an orbit camera with custom config
    pub fn with_config(config: OrbitCameraConfig) -> Self {
        let default_distance = 5.0_f32.clamp(config.min_distance, config.max_distance);
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            target_distance: default_distance,
            current_distance: default_distance,
            position: Vec3::ZERO,
            pivot: Vec3::ZERO,
        }
    }

    /// Get the camera's current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the point the camera orbits around
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Get the current orbit distance
    pub fn distance(&self) -> f32 {
        self.current_distance
    }

    /// Get the camera's forward direction
    pub fn forward(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        Vec3::new(
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
            -self.yaw.cos() * cos_pitch,
        )
    }

    /// Get the camera's right direction
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Forward direction projected on the ground plane.
    ///
    /// Movement input is projected onto this basis so that walking "up"
    /// never points into the sky regardless of camera tilt.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Right direction projected on the ground plane
    pub fn flat_right(&self) -> Vec3 {
        self.right()
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.pivot, Vec3::Y)
    }

    /// Get the rotation quaternion
    ///
    /// Yaw is clockwise-positive (matching `forward`), so it is negated for
    /// the counter-clockwise rotation about +Y.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::YXZ, -self.yaw, self.pitch, 0.0)
    }

    /// Apply a mouse-look delta to yaw and pitch
    pub fn apply_mouse_look(&mut self, mouse_delta: Vec2) {
        self.yaw += mouse_delta.x * self.config.sensitivity;

        self.pitch -= mouse_delta.y * self.config.sensitivity;
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = self.pitch.clamp(pitch_min, pitch_max);
    }

    /// Handle scroll wheel zoom
    pub fn handle_zoom(&mut self, scroll_delta: f32) {
        self.target_distance -= scroll_delta * self.config.zoom_speed;
        self.target_distance = self
            .target_distance
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Update the camera (call once per physics step, before the player)
    ///
    /// Consumes the accumulated mouse delta from the input state: all motion
    /// events queued since the previous step are applied together, and the
    /// accumulator is left at zero.
    pub fn update(
        &mut self,
        input: &mut InputState,
        pivot: Vec3,
        physics: Option<&PhysicsWorld>,
        dt: f32,
    ) {
        let mouse_delta = input.consume_mouse_delta();
        if input.cursor_captured {
            self.apply_mouse_look(mouse_delta);
        }

        if input.scroll_delta.abs() > 0.0 {
            self.handle_zoom(input.scroll_delta);
        }

        // Smooth zoom interpolation
        let zoom_lerp = 1.0 - (1.0 - self.config.zoom_smoothing).powf(dt * 60.0);
        self.current_distance =
            self.current_distance + (self.target_distance - self.current_distance) * zoom_lerp;

        self.pivot = pivot;

        // Offset direction is opposite of the look direction
        let offset_dir = Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            -self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );

        let ideal_position = pivot + offset_dir * self.current_distance;

        // Pull the camera in when level geometry would occlude it
        if let Some(physics) = physics {
            let ray_dir = (ideal_position - pivot).normalize();
            let ray_length = self.current_distance + self.config.collision_radius;

            if let Some((_handle, toi)) =
                physics.raycast(pivot, ray_dir, ray_length, QueryFilter::default())
            {
                let safe_distance = (toi - self.config.collision_radius).max(0.5);
                self.position = pivot + ray_dir * safe_distance;
            } else {
                self.position = ideal_position;
            }
        } else {
            self.position = ideal_position;
        }
    }

    /// Set the camera yaw directly
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the camera pitch directly (clamped)
    pub fn set_pitch(&mut self, pitch: f32) {
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = pitch.clamp(pitch_min, pitch_max);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
