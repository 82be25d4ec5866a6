//! Input system with action-based mapping
//!
//! Provides an abstraction layer between raw input events and game actions.
//! Mouse motion arrives out-of-band from the window event loop and is only
//! ever accumulated here; the camera consumes the accumulated delta once per
//! physics step.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Stick/keyboard movement input below this magnitude is ignored.
pub const MOVE_DEADZONE: f32 = 0.4;

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Release/capture the mouse cursor (Escape by default)
    ToggleCursor,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
    /// Accumulated mouse movement since the last physics step
    pub mouse_delta: Vec2,
    /// Scroll wheel delta for this frame
    pub scroll_delta: f32,
    /// Analog stick movement, fed by a gamepad layer (x = right, y = forward)
    pub analog_move: Vec2,
    /// Whether the cursor is captured (invisible, locked)
    pub cursor_captured: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    /// Take the accumulated mouse delta, leaving zero behind.
    ///
    /// Called once per physics step so that all motion events queued since
    /// the previous step are consumed together.
    pub fn consume_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// The 2-axis movement vector (x = right, y = forward).
    ///
    /// Digital keys win over the analog stick when both are active. Vectors
    /// shorter than [`MOVE_DEADZONE`] read as zero; longer ones are clamped
    /// to unit length.
    pub fn movement_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.is_held(InputAction::MoveForward) {
            axis.y += 1.0;
        }
        if self.is_held(InputAction::MoveBackward) {
            axis.y -= 1.0;
        }
        if self.is_held(InputAction::MoveRight) {
            axis.x += 1.0;
        }
        if self.is_held(InputAction::MoveLeft) {
            axis.x -= 1.0;
        }

        if axis == Vec2::ZERO {
            axis = self.analog_move;
        }

        if axis.length() < MOVE_DEADZONE {
            return Vec2::ZERO;
        }
        axis.clamp_length_max(1.0)
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.scroll_delta = 0.0;
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.held.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        self.analog_move = Vec2::ZERO;
    }
}

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Key to action mappings
    bindings: HashMap<KeyCode, InputAction>,
    /// Reverse lookup: action to all bound keys
    reverse: HashMap<InputAction, Vec<KeyCode>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        // Actions
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::Escape, InputAction::ToggleCursor);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(key, action);
        self.reverse.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.reverse.get_mut(&action) {
                keys.retain(|k| *k != key);
            }
        }
    }

    /// Get the action for a key, if any
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: InputAction) -> &[KeyCode] {
        self.reverse.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Input handler that processes raw winit events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
            mouse_sensitivity: 1.0,
            invert_y: false,
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_action(key_code) {
                match element_state {
                    ElementState::Pressed => {
                        if !self.state.held.contains(&action) {
                            self.state.just_pressed.insert(action);
                        }
                        self.state.held.insert(action);
                    }
                    ElementState::Released => {
                        self.state.held.remove(&action);
                        self.state.just_released.insert(action);
                    }
                }
            }
        }
    }

    /// Handle mouse movement (accumulates until the next physics step)
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.state.cursor_captured {
            let y_mult = if self.invert_y { -1.0 } else { 1.0 };
            self.state.mouse_delta += Vec2::new(
                delta.0 as f32 * self.mouse_sensitivity,
                delta.1 as f32 * self.mouse_sensitivity * y_mult,
            );
        }
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };

        self.state.scroll_delta += scroll;
    }

    /// Feed the analog movement stick from a gamepad layer
    pub fn set_analog_move(&mut self, stick: Vec2) {
        self.state.analog_move = stick;
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }

    /// Set cursor capture state
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.state.cursor_captured = captured;
        if !captured {
            // Motion accumulated while captured should not leak into the
            // first step after recapture.
            self.state.mouse_delta = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.get_action(KeyCode::KeyW),
            Some(InputAction::MoveForward)
        );
        assert_eq!(bindings.get_action(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(
            bindings.get_action(KeyCode::Escape),
            Some(InputAction::ToggleCursor)
        );
    }

    #[test]
    fn test_rebinding_round_trip() {
        let mut bindings = InputBindings::default();

        // Move jump from Space to a new key
        bindings.unbind(KeyCode::Space);
        bindings.bind(KeyCode::KeyJ, InputAction::Jump);

        assert_eq!(bindings.get_action(KeyCode::Space), None);
        assert_eq!(bindings.get_action(KeyCode::KeyJ), Some(InputAction::Jump));
        assert_eq!(bindings.keys_for(InputAction::Jump), &[KeyCode::KeyJ]);

        // Unbinding one of two keys leaves the other
        bindings.unbind(KeyCode::ArrowUp);
        assert_eq!(
            bindings.keys_for(InputAction::MoveForward),
            &[KeyCode::KeyW]
        );
    }

    #[test]
    fn test_movement_axis_digital() {
        let mut state = InputState::new();
        state.held.insert(InputAction::MoveForward);
        let axis = state.movement_axis();
        assert_eq!(axis, Vec2::new(0.0, 1.0));

        state.held.insert(InputAction::MoveRight);
        let axis = state.movement_axis();
        assert!((axis.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_movement_axis_deadzone() {
        let mut state = InputState::new();
        state.analog_move = Vec2::new(0.2, 0.2); // length ~0.28, inside deadzone
        assert_eq!(state.movement_axis(), Vec2::ZERO);

        state.analog_move = Vec2::new(0.5, 0.0);
        assert_eq!(state.movement_axis(), Vec2::new(0.5, 0.0));

        state.analog_move = Vec2::new(3.0, 0.0); // over-unit input clamps
        assert_eq!(state.movement_axis(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_consume_mouse_delta_resets() {
        let mut state = InputState::new();
        state.mouse_delta = Vec2::new(3.0, -2.0);
        assert_eq!(state.consume_mouse_delta(), Vec2::new(3.0, -2.0));
        assert_eq!(state.mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn test_mouse_motion_accumulates() {
        let mut handler = InputHandler::new();
        handler.set_cursor_captured(true);
        handler.handle_mouse_motion((2.0, 1.0));
        handler.handle_mouse_motion((3.0, -4.0));
        assert_eq!(handler.state.mouse_delta, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_mouse_motion_ignored_without_capture() {
        let mut handler = InputHandler::new();
        handler.handle_mouse_motion((10.0, 10.0));
        assert_eq!(handler.state.mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn test_just_pressed_cleared_on_end_frame() {
        let mut handler = InputHandler::new();
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::Space), ElementState::Pressed);
        assert!(handler.state.is_just_pressed(InputAction::Jump));
        assert!(handler.state.is_held(InputAction::Jump));

        handler.end_frame();
        assert!(!handler.state.is_just_pressed(InputAction::Jump));
        assert!(handler.state.is_held(InputAction::Jump));
    }
}
