//! Summit Game - Character control and game logic
//!
//! Provides the third-person player controller, orbit camera, action-mapped
//! input, and level events (kill plane, level-complete flag).

pub mod camera;
pub mod input;
pub mod level;
pub mod player;

pub use camera::{OrbitCamera, OrbitCameraConfig};
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use level::{Level, LevelEvent};
pub use player::{
    AnimationState, JumpKinematics, PlayerController, SkinRotation, StepEvents, TuningParameters,
};
