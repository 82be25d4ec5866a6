//! Player controller module
//!
//! Third-person character movement: ground movement, buffered jumping with
//! split rise/fall gravity, skin orientation, and animation/effect selection.

mod animation;
mod controller;
mod skin;
mod tuning;

pub use animation::{AnimationState, StepEvents};
pub use controller::PlayerController;
pub use skin::SkinRotation;
pub use tuning::{JumpKinematics, TuningParameters};
