//! Level state: spawn point, kill plane, and the level-complete flag
//!
//! The level owns the two abnormal-condition events and calls the player's
//! handler methods directly each step; there is no global event bus.

use glam::Vec3;
use summit_physics::PhysicsWorld;
use tracing::info;

use crate::player::PlayerController;

/// Events reported by the level check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    /// The player fell below the kill plane and was respawned
    KillPlaneTouched,
    /// The player reached the flag; the level is complete
    FlagReached,
}

/// A playable level: geometry bounds and goal
#[derive(Debug, Clone)]
pub struct Level {
    /// Where the player spawns and respawns
    pub spawn_point: Vec3,
    /// Falling below this height counts as death
    pub kill_plane_y: f32,
    /// Position of the level-complete flag
    pub flag_position: Vec3,
    /// Radius around the flag that counts as reaching it
    pub flag_radius: f32,
    /// Set once the flag has been reached
    completed: bool,
}

impl Level {
    /// Create a level
    pub fn new(spawn_point: Vec3, kill_plane_y: f32, flag_position: Vec3, flag_radius: f32) -> Self {
        Self {
            spawn_point,
            kill_plane_y,
            flag_position,
            flag_radius,
            completed: false,
        }
    }

    /// Whether the flag has been reached
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Check the player against the kill plane and the flag.
    ///
    /// Call after the player's fixed update. Invokes the matching handler on
    /// the controller and reports what happened.
    pub fn check(
        &mut self,
        player: &mut PlayerController,
        physics: &mut PhysicsWorld,
    ) -> Option<LevelEvent> {
        if self.completed {
            return None;
        }

        let position = player.position();

        if position.y < self.kill_plane_y {
            info!("Player fell below the kill plane, respawning");
            player.on_kill_plane_touched(physics);
            return Some(LevelEvent::KillPlaneTouched);
        }

        if position.distance(self.flag_position) <= self.flag_radius {
            info!("Flag reached, level complete");
            self.completed = true;
            player.on_flag_reached();
            return Some(LevelEvent::FlagReached);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::TuningParameters;

    fn setup() -> (Level, PlayerController, PhysicsWorld) {
        let level = Level::new(Vec3::new(0.0, 1.0, 0.0), -10.0, Vec3::new(20.0, 1.0, 0.0), 1.5);
        let mut physics = PhysicsWorld::new();
        let mut player = PlayerController::new(TuningParameters::default());
        player.spawn(&mut physics, level.spawn_point);
        (level, player, physics)
    }

    #[test]
    fn test_no_event_in_bounds() {
        let (mut level, mut player, mut physics) = setup();
        assert_eq!(level.check(&mut player, &mut physics), None);
    }

    #[test]
    fn test_kill_plane_respawns_player() {
        let (mut level, mut player, mut physics) = setup();
        player.body.position = Vec3::new(5.0, -11.0, 3.0);

        let event = level.check(&mut player, &mut physics);
        assert_eq!(event, Some(LevelEvent::KillPlaneTouched));
        assert_eq!(player.position(), level.spawn_point);
        assert_eq!(player.velocity(), Vec3::ZERO);
        assert!(player.is_active());
        assert!(!level.is_completed());
    }

    #[test]
    fn test_flag_completes_level() {
        let (mut level, mut player, mut physics) = setup();
        player.body.position = Vec3::new(19.5, 1.0, 0.5);

        let event = level.check(&mut player, &mut physics);
        assert_eq!(event, Some(LevelEvent::FlagReached));
        assert!(level.is_completed());
        assert!(!player.is_active());

        // Completed levels emit nothing further
        player.body.position = Vec3::new(0.0, -50.0, 0.0);
        assert_eq!(level.check(&mut player, &mut physics), None);
    }
}
