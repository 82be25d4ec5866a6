//! Kinematic character body using rapier3d's kinematic character controller
//!
//! This is the collision-aware movement integrator: the player controller
//! decides a velocity, the character body sweeps it against level geometry
//! and reports the resulting position and grounded state.

use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

/// Character body configuration
#[derive(Debug, Clone)]
pub struct CharacterBodyConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for CharacterBodyConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Kinematic capsule body for player movement with collision
pub struct CharacterBody {
    /// Configuration
    pub config: CharacterBodyConfig,
    /// Current position (capsule base)
    pub position: Vec3,
    /// Current velocity
    pub velocity: Vec3,
    /// Whether the body is on the ground
    pub grounded: bool,
    /// The collider handle for this body
    pub collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl CharacterBody {
    /// Create a new character body with default config
    pub fn new() -> Self {
        Self::with_config(CharacterBodyConfig::default())
    }

    /// Create a new character body with custom config
    pub fn with_config(config: CharacterBodyConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: false,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: false,
            collider_handle: None,
            controller,
        }
    }

    /// Spawn the body in the physics world
    pub fn spawn(&mut self, physics: &mut crate::PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(vector![position.x, position.y + self.config.height / 2.0, position.z])
            .friction(0.0) // Smooth sliding against walls
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        handle
    }

    /// Sweep the body along a desired translation, sliding against geometry
    pub fn move_with_collisions(
        &mut self,
        physics: &mut crate::PhysicsWorld,
        desired_translation: Vec3,
        dt: f32,
    ) {
        let Some(collider_handle) = self.collider_handle else {
            return;
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return;
        };

        let shape = collider.shape();
        let current_pos = Isometry::translation(
            self.position.x,
            self.position.y + self.config.height / 2.0,
            self.position.z,
        );

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.grounded = movement.grounded;

        let effective = movement.translation;
        self.position.x += effective.x;
        self.position.y += effective.y;
        self.position.z += effective.z;

        if let Some(collider) = physics.collider_set.get_mut(collider_handle) {
            collider.set_translation(vector![
                self.position.x,
                self.position.y + self.config.height / 2.0,
                self.position.z
            ]);
        }
    }

    /// Apply the current velocity over one timestep and resolve collisions
    pub fn move_by_velocity(&mut self, physics: &mut crate::PhysicsWorld, dt: f32) {
        let translation = self.velocity * dt;
        self.move_with_collisions(physics, translation, dt);
    }

    /// Set the body's position directly (teleport)
    pub fn set_position(&mut self, physics: &mut crate::PhysicsWorld, position: Vec3) {
        self.position = position;

        if let Some(handle) = self.collider_handle {
            if let Some(collider) = physics.collider_set.get_mut(handle) {
                collider.set_translation(vector![
                    position.x,
                    position.y + self.config.height / 2.0,
                    position.z
                ]);
            }
        }
    }

    /// Get the head position (top of capsule, used as the camera pivot)
    pub fn head_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y + self.config.height - 0.1, // Slightly below top
            self.position.z,
        )
    }

    /// Check if standing on ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}

impl Default for CharacterBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_body_config() {
        let config = CharacterBodyConfig::default();
        assert_eq!(config.height, 1.8);
        assert_eq!(config.radius, 0.4);
        assert_eq!(config.max_slope_angle, 45.0);
    }

    #[test]
    fn test_head_position() {
        let mut body = CharacterBody::new();
        body.position = Vec3::new(0.0, 0.0, 0.0);
        let head = body.head_position();
        assert!(head.y > 0.0);
        assert!(head.y < body.config.height);
    }

    #[test]
    fn test_teleport_moves_collider() {
        let mut world = crate::PhysicsWorld::new();
        let mut body = CharacterBody::new();
        body.spawn(&mut world, Vec3::new(0.0, 5.0, 0.0));
        body.set_position(&mut world, Vec3::new(3.0, 1.0, -2.0));
        assert_eq!(body.position, Vec3::new(3.0, 1.0, -2.0));

        let handle = body.collider_handle.expect("spawned body has a collider");
        let translation = world.get_collider(handle).unwrap().translation();
        assert!((translation.x - 3.0).abs() < 1e-6);
        assert!((translation.z + 2.0).abs() < 1e-6);
    }
}
