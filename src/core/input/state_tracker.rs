//=========================================================================
// State Tracker
//=========================================================================
//
// Frame-coherent input state for scenes.
//
// Architecture:
//   InputEvent → process_events() → persistent state + frame deltas → query
//
// Frame lifecycle: clear() → process_events() → finalize_frame() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton, TouchId};
use super::gamepad::GamepadState;

//=== StateTracker ========================================================

/// Tracks held controls and per-frame transitions for every device.
#[derive(Debug)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,
    touches: HashMap<TouchId, (f32, f32)>,
    gamepads: GamepadState,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,
    touches_started_this_frame: HashSet<TouchId>,
    touches_ended_this_frame: HashMap<TouchId, (f32, f32)>,
    wheel_delta: (f32, f32),

    //--- Continuous Input (accumulated/calculated) -----------------------
    mouse_delta: (f32, f32),
    last_mouse_position: (f32, f32),
}

impl StateTracker {
    /// Creates an empty tracker with the default gamepad dead zone.
    pub fn new() -> Self {
        Self::with_dead_zone(GamepadState::DEFAULT_DEAD_ZONE)
    }

    /// # Panics
    ///
    /// Panics if `dead_zone` is outside `[0, 1)`.
    pub fn with_dead_zone(dead_zone: f32) -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            touches: HashMap::new(),
            gamepads: GamepadState::new(dead_zone),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            mouse_buttons_released_this_frame: HashSet::new(),
            touches_started_this_frame: HashSet::new(),
            touches_ended_this_frame: HashMap::new(),
            wheel_delta: (0.0, 0.0),
            mouse_delta: (0.0, 0.0),
            last_mouse_position: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Starts a new frame, dropping last frame's transitions.
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.touches_started_this_frame.clear();
        self.touches_ended_this_frame.clear();
        self.wheel_delta = (0.0, 0.0);
        self.gamepads.clear();
        self.last_mouse_position = self.mouse_position;
    }

    /// Applies a batch of events in order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Computes derived per-frame values.
    pub fn finalize_frame(&mut self) {
        self.mouse_delta = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = modifiers;
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = modifiers;
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = modifiers;
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = modifiers;
                if self.mouse_buttons_down.remove(&button) {
                    self.mouse_buttons_released_this_frame.insert(button);
                }
            }

            InputEvent::MouseMoved { x, y } => self.mouse_position = (x, y),

            InputEvent::MouseWheel { dx, dy } => {
                self.wheel_delta.0 += dx;
                self.wheel_delta.1 += dy;
            }

            InputEvent::TouchStart { id, x, y } => {
                if self.touches.insert(id, (x, y)).is_none() {
                    self.touches_started_this_frame.insert(id);
                }
            }

            InputEvent::TouchMove { id, x, y } => {
                // Moves for fingers that never started are stale.
                if let Some(position) = self.touches.get_mut(&id) {
                    *position = (x, y);
                }
            }

            InputEvent::TouchEnd { id, x, y } | InputEvent::TouchCancel { id, x, y } => {
                if self.touches.remove(&id).is_some() {
                    self.touches_ended_this_frame.insert(id, (x, y));
                }
            }

            InputEvent::GamepadConnected { .. }
            | InputEvent::GamepadDisconnected { .. }
            | InputEvent::GamepadButtonDown { .. }
            | InputEvent::GamepadButtonUp { .. }
            | InputEvent::GamepadAxisMoved { .. } => self.gamepads.process_event(event),

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    pub fn keys_pressed(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_pressed_this_frame.iter()
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    /// Cursor position in pixels, top-left origin.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Cursor movement since the previous frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Scroll accumulated this frame, in lines.
    pub fn wheel_delta(&self) -> (f32, f32) {
        self.wheel_delta
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn shift_held(&self) -> bool {
        self.modifiers.shift
    }

    pub fn ctrl_held(&self) -> bool {
        self.modifiers.ctrl
    }

    pub fn alt_held(&self) -> bool {
        self.modifiers.alt
    }

    //=====================================================================
    // Query API - Touch
    //=====================================================================

    /// Fingers currently on the surface with their positions.
    pub fn touches(&self) -> impl Iterator<Item = (TouchId, (f32, f32))> + '_ {
        self.touches.iter().map(|(&id, &position)| (id, position))
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    pub fn touch_position(&self, id: TouchId) -> Option<(f32, f32)> {
        self.touches.get(&id).copied()
    }

    /// Whether finger `id` touched down this frame.
    pub fn is_touch_started(&self, id: TouchId) -> bool {
        self.touches_started_this_frame.contains(&id)
    }

    /// Where finger `id` lifted, if it lifted or was cancelled this frame.
    pub fn touch_ended_at(&self, id: TouchId) -> Option<(f32, f32)> {
        self.touches_ended_this_frame.get(&id).copied()
    }

    pub fn touches_started(&self) -> impl Iterator<Item = &TouchId> {
        self.touches_started_this_frame.iter()
    }

    pub fn touches_ended(&self) -> impl Iterator<Item = (TouchId, (f32, f32))> + '_ {
        self.touches_ended_this_frame
            .iter()
            .map(|(&id, &position)| (id, position))
    }

    //=====================================================================
    // Query API - Gamepads
    //=====================================================================

    pub fn gamepads(&self) -> &GamepadState {
        &self.gamepads
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
