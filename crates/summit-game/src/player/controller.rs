//! Third-person player controller
//!
//! Runs once per fixed physics step: turns the movement axis into a
//! velocity, handles buffered jumping with coyote time and split gravity,
//! drives the skin yaw, selects an animation state, and delegates collision
//! resolution to the kinematic character body.

use glam::{Vec2, Vec3};
use summit_physics::{CharacterBody, PhysicsWorld};

use crate::camera::OrbitCamera;
use crate::input::{InputAction, InputState};

use super::animation::{AnimationState, StepEvents};
use super::skin::SkinRotation;
use super::tuning::{JumpKinematics, TuningParameters};

/// How long a jump press is remembered before landing
const JUMP_BUFFER_TIME: f32 = 0.1;
/// Grace window after leaving a platform during which a jump still fires
const COYOTE_TIME: f32 = 0.15;
/// Squared horizontal speed below which the character counts as standing
const MOVING_EPSILON: f32 = 1e-4;

/// Third-person player controller
pub struct PlayerController {
    /// Movement tuning (immutable per instance)
    pub tuning: TuningParameters,
    /// Jump constants derived from tuning at construction
    pub jump: JumpKinematics,
    /// Kinematic capsule resolving movement against level geometry
    pub body: CharacterBody,
    /// Skin yaw chasing the movement direction
    pub skin: SkinRotation,
    /// Where kill-plane resets teleport to
    spawn_point: Vec3,
    /// Velocity decided by the controller, handed to the body each step
    velocity: Vec3,
    /// Floor flag from the previous step (landing edge detection)
    was_grounded: bool,
    /// Jump permission; true while grounded or within coyote time
    can_jump: bool,
    /// Jump buffer countdown; negative means expired
    jump_buffer: f32,
    /// Coyote countdown; negative means expired
    coyote_timer: f32,
    /// Whether the coyote countdown has been armed for the current fall
    coyote_armed: bool,
    /// Animation state carried between steps
    animation: AnimationState,
    /// False once the flag is reached; updates become no-ops
    active: bool,
}

impl PlayerController {
    /// Create a new controller with the given tuning
    pub fn new(tuning: TuningParameters) -> Self {
        let jump = JumpKinematics::derive(&tuning);
        let skin = SkinRotation::new(tuning.rotation_speed);
        Self {
            tuning,
            jump,
            body: CharacterBody::new(),
            skin,
            spawn_point: Vec3::ZERO,
            velocity: Vec3::ZERO,
            was_grounded: false,
            can_jump: false,
            jump_buffer: 0.0,
            coyote_timer: 0.0,
            coyote_armed: false,
            animation: AnimationState::Idle,
            active: true,
        }
    }

    /// Spawn the player in the world; the position becomes the respawn point
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.body.spawn(physics, position);
        self.spawn_point = position;
        self.reset_motion();
    }

    /// The player's current position
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// The controller's current velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// The current animation state
    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    /// Whether jumping is currently permitted
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    /// Whether the controller is still simulating (false after flag reached)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Update the player for one fixed physics step.
    ///
    /// The camera must already have been updated for this step; movement
    /// input is projected onto its flattened basis.
    pub fn fixed_update(
        &mut self,
        physics: &mut PhysicsWorld,
        input: &InputState,
        camera: &OrbitCamera,
        dt: f32,
    ) -> StepEvents {
        if !self.active {
            return StepEvents::quiet(self.animation);
        }

        let axis = input.movement_axis();
        let move_dir = Self::project_axis(axis, camera);
        let jump_pressed = input.is_just_pressed(InputAction::Jump);
        let grounded = self.body.is_grounded();

        let events = self.integrate(move_dir, jump_pressed, grounded, dt);

        self.body.velocity = self.velocity;
        self.body.move_by_velocity(physics, dt);

        events
    }

    /// Project the 2-axis input onto the camera's ground-plane basis
    fn project_axis(axis: Vec2, camera: &OrbitCamera) -> Vec3 {
        let dir = camera.flat_forward() * axis.y + camera.flat_right() * axis.x;
        // The basis is already horizontal; normalize_or_zero also handles
        // the no-input case.
        Vec3::new(dir.x, 0.0, dir.z).normalize_or_zero()
    }

    /// The control core: everything except input projection and collision.
    ///
    /// Kept free of the physics world so the jump/gravity/animation rules
    /// can be exercised directly in tests.
    fn integrate(
        &mut self,
        move_dir: Vec3,
        jump_pressed: bool,
        grounded: bool,
        dt: f32,
    ) -> StepEvents {
        let landed = grounded && !self.was_grounded;

        // Skin yaw chases the movement direction
        self.skin.update(move_dir, dt);

        // Horizontal velocity is re-derived from input every tick rather
        // than integrated towards a target speed; zero input therefore
        // gives exactly zero.
        let horizontal = move_dir * (self.tuning.move_speed + self.tuning.acceleration * dt);
        self.velocity.x = horizontal.x;
        self.velocity.z = horizontal.z;

        // Split gravity: one constant while rising, another while falling
        self.velocity.y += self.jump.gravity_for(self.velocity.y) * dt;
        if grounded && self.velocity.y < 0.0 {
            // The floor already stopped us; matches what a sweep-and-slide
            // resolver reports back for the vertical component.
            self.velocity.y = 0.0;
        }

        // Jump permission and coyote time
        if grounded {
            self.can_jump = true;
            self.coyote_armed = false;
        } else if self.can_jump && !self.coyote_armed {
            self.coyote_timer = COYOTE_TIME;
            self.coyote_armed = true;
        }

        self.coyote_timer -= dt;
        self.jump_buffer -= dt;
        if self.coyote_armed && self.coyote_timer <= 0.0 {
            self.can_jump = false;
        }

        if jump_pressed {
            self.jump_buffer = JUMP_BUFFER_TIME;
        }

        let mut jumped = false;
        if self.jump_buffer > 0.0 && self.can_jump {
            self.velocity.y = self.jump.launch_velocity;
            self.can_jump = false;
            self.jump_buffer = 0.0;
            jumped = true;
        }

        // Animation selection, first match wins. An airborne, still-rising
        // step matches nothing and keeps the previous state playing.
        let moving =
            Vec2::new(self.velocity.x, self.velocity.z).length_squared() > MOVING_EPSILON;
        if jumped {
            self.animation = AnimationState::Jump;
        } else if !grounded && self.velocity.y < 0.0 {
            self.animation = AnimationState::Fall;
        } else if grounded && moving {
            self.animation = AnimationState::Move;
        } else if grounded {
            self.animation = AnimationState::Idle;
        }

        self.was_grounded = grounded;

        StepEvents {
            jumped,
            landed,
            dust_active: grounded && moving,
            animation: self.animation,
        }
    }

    /// Kill-plane handler: teleport to spawn, zero motion, resume updates.
    ///
    /// Called directly by the level owner, not via an event bus.
    pub fn on_kill_plane_touched(&mut self, physics: &mut PhysicsWorld) {
        self.body.set_position(physics, self.spawn_point);
        self.reset_motion();
        self.active = true;
    }

    /// Flag handler: freeze the controller; subsequent updates are no-ops
    pub fn on_flag_reached(&mut self) {
        self.active = false;
        self.velocity = Vec3::ZERO;
        self.body.velocity = Vec3::ZERO;
    }

    fn reset_motion(&mut self) {
        self.velocity = Vec3::ZERO;
        self.body.velocity = Vec3::ZERO;
        self.was_grounded = false;
        self.can_jump = false;
        self.jump_buffer = 0.0;
        self.coyote_timer = 0.0;
        self.coyote_armed = false;
        self.animation = AnimationState::Idle;
    }
}
