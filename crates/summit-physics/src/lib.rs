//! Summit Physics - Collision world built on rapier3d
//!
//! Provides static level geometry, raycasts for the camera, and the
//! kinematic character body the player controller delegates its movement to.

mod character_body;

pub use character_body::{CharacterBody, CharacterBodyConfig};

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;

/// The collision world containing all level geometry
pub struct PhysicsWorld {
    /// Rigid body storage (static level bodies only)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,

    /// Island manager (needed by collider removal)
    island_manager: IslandManager,
    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new, empty physics world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Refresh spatial queries after colliders move or spawn.
    ///
    /// Must be called before the first raycast or character move of a step.
    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, true);
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, f32)> {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        self.query_pipeline
            .cast_ray(&self.rigid_body_set, &self.collider_set, &ray, max_distance, true, filter)
    }

    /// Create a ground plane collider
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .friction(0.7)
            .restitution(0.0)
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static box collider (platforms, walls)
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_creation() {
        let mut world = PhysicsWorld::new();
        let ground = world.create_ground(0.0);
        assert!(world.get_collider(ground).is_some());
    }

    #[test]
    fn test_raycast_hits_ground() {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        world.update_queries();

        let hit = world.raycast(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            100.0,
            QueryFilter::default(),
        );
        let (_, distance) = hit.expect("ray straight down should hit the ground");
        assert!((distance - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_raycast_misses_above_box() {
        let mut world = PhysicsWorld::new();
        world.create_static_box(Vec3::splat(1.0), Vec3::new(0.0, 0.0, 0.0));
        world.update_queries();

        let hit = world.raycast(
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            100.0,
            QueryFilter::default(),
        );
        assert!(hit.is_none());
    }
}
