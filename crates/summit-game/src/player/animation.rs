//! Animation states and per-step feedback flags

/// Animation state selected by the controller each step.
///
/// The controller picks states; playback and blending belong to whatever
/// animation system consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Standing still on the ground
    Idle,
    /// Running on the ground
    Move,
    /// Launching / rising from a jump
    Jump,
    /// Airborne and falling
    Fall,
}

impl AnimationState {
    /// Clip name for animation playback
    pub fn clip_name(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Move => "move",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
        }
    }
}

/// Feedback produced by one controller step
#[derive(Debug, Clone, Copy)]
pub struct StepEvents {
    /// A jump executed this step (play jump sound, fire jump animation)
    pub jumped: bool,
    /// The character touched down this step (play landing sound)
    pub landed: bool,
    /// Dust particles should be emitting (grounded and moving)
    pub dust_active: bool,
    /// Animation state after this step
    pub animation: AnimationState,
}

impl StepEvents {
    /// Events for a step in which nothing happened
    pub fn quiet(animation: AnimationState) -> Self {
        Self {
            jumped: false,
            landed: false,
            dust_active: false,
            animation,
        }
    }
}
