//! Input latch with action-based mapping
//!
//! Raw key, mouse, and look events are queued by the host and applied here
//! once per frame. Movement keys are level-triggered; jump and fire are
//! edge-triggered and must be consumed.

use std::collections::{HashMap, HashSet};

use glam::{Vec2, Vec3};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (W / ArrowUp by default)
    MoveForward,
    /// Move backward (S / ArrowDown by default)
    MoveBackward,
    /// Move left (A / ArrowLeft by default)
    MoveLeft,
    /// Move right (D / ArrowRight by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Fire (left mouse button by default)
    Fire,
}

/// Raw input event delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A keyboard key changed state
    Key { code: KeyCode, pressed: bool },
    /// A mouse button changed state
    MouseButton { button: MouseButton, pressed: bool },
    /// Fire attempt that bypasses the bindings
    FireAttempt,
    /// Jump attempt that bypasses the bindings
    JumpAttempt,
    /// Raw mouse movement in pixels
    Look { dx: f32, dy: f32 },
    /// Drawable area changed size
    Resize { width: u32, height: u32 },
    /// Pointer lock gained or lost
    CursorCaptured(bool),
}

/// Binding of a physical input to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(u32), // 0 = left, 1 = right, 2 = middle
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

fn mouse_button_id(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(id) => id as u32,
    }
}

/// Maps physical inputs to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputBinding, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind_mouse(0, InputAction::Fire);

        bindings
    }
}

impl InputBindings {
    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(InputBinding::Key(key), action);
    }

    /// Bind a mouse button to an action
    pub fn bind_mouse(&mut self, button: u32, action: InputAction) {
        self.bindings.insert(InputBinding::Mouse(button), action);
    }

    /// Get the action for a binding, if any
    pub fn get_action(&self, binding: &InputBinding) -> Option<InputAction> {
        self.bindings.get(binding).copied()
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.get_action(&InputBinding::Key(key))
    }
}

/// Held movement directions for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Unit direction in local space: `x` is right minus left, `z` is
    /// forward minus backward. Zero when nothing (or only opposing keys) is held.
    pub fn local_direction(&self) -> Vec3 {
        let x = self.right as i8 - self.left as i8;
        let z = self.forward as i8 - self.backward as i8;
        Vec3::new(x as f32, 0.0, z as f32).normalize_or_zero()
    }

    /// Whether forward or backward is held
    pub fn longitudinal(&self) -> bool {
        self.forward || self.backward
    }

    /// Whether left or right is held
    pub fn lateral(&self) -> bool {
        self.left || self.right
    }
}

/// Latched input state consumed by the frame orchestrator
#[derive(Debug, Clone)]
pub struct InputLatch {
    /// Input bindings
    pub bindings: InputBindings,
    held: HashSet<InputAction>,
    fire_pending: u32,
    jump_pending: bool,
    look_delta: Vec2,
    cursor_captured: bool,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    /// Create a latch with default bindings. Starts captured so headless
    /// hosts do not need a pointer-lock step.
    pub fn new() -> Self {
        Self {
            bindings: InputBindings::default(),
            held: HashSet::new(),
            fire_pending: 0,
            jump_pending: false,
            look_delta: Vec2::ZERO,
            cursor_captured: true,
        }
    }

    /// Apply one queued event. Resize is not an input concern and is ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { code, pressed } => self.set_key_state(code, pressed),
            InputEvent::MouseButton { button, pressed } => self.set_mouse_button(button, pressed),
            InputEvent::FireAttempt => self.queue_fire(),
            InputEvent::JumpAttempt => self.queue_jump(),
            InputEvent::Look { dx, dy } => self.add_look_delta(dx, dy),
            InputEvent::CursorCaptured(captured) => self.set_cursor_captured(captured),
            InputEvent::Resize { .. } => {}
        }
    }

    /// Update held state for a keyboard key
    pub fn set_key_state(&mut self, code: KeyCode, pressed: bool) {
        if let Some(action) = self.bindings.get_key_action(code) {
            self.set_action_state(action, pressed);
        }
    }

    /// Update held state for a mouse button
    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let binding = InputBinding::Mouse(mouse_button_id(button));
        if let Some(action) = self.bindings.get_action(&binding) {
            self.set_action_state(action, pressed);
        }
    }

    fn set_action_state(&mut self, action: InputAction, pressed: bool) {
        if !pressed {
            self.held.remove(&action);
            return;
        }
        // Key repeat re-sends presses while held; only the transition latches
        if self.held.insert(action) {
            match action {
                InputAction::Jump => self.queue_jump(),
                InputAction::Fire => self.queue_fire(),
                _ => {}
            }
        }
    }

    /// Latch a fire edge. Dropped while the cursor is not captured.
    pub fn queue_fire(&mut self) {
        if self.cursor_captured {
            self.fire_pending = self.fire_pending.saturating_add(1);
        }
    }

    /// Latch a jump edge
    pub fn queue_jump(&mut self) {
        self.jump_pending = true;
    }

    /// Accumulate raw look movement. Non-finite deltas are dropped.
    pub fn add_look_delta(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Take the look movement accumulated since the last call
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Consume one pending fire edge
    pub fn consume_fire(&mut self) -> bool {
        if self.fire_pending == 0 {
            return false;
        }
        self.fire_pending -= 1;
        true
    }

    /// Consume the pending jump edge
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }

    /// Discard pending edges and look movement
    pub fn clear_edges(&mut self) {
        self.fire_pending = 0;
        self.jump_pending = false;
        self.look_delta = Vec2::ZERO;
    }

    /// Set cursor capture state. Losing capture releases all held actions.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        if !captured {
            self.held.clear();
            self.look_delta = Vec2::ZERO;
        }
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Current movement intent from held directions
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            forward: self.is_held(InputAction::MoveForward),
            backward: self.is_held(InputAction::MoveBackward),
            left: self.is_held(InputAction::MoveLeft),
            right: self.is_held(InputAction::MoveRight),
        }
    }
}
