//=========================================================================
// Input Events
//=========================================================================
//
// Portable representation of keyboard, mouse, touch and gamepad input.
//
// Event Flow:
// ```text
//   Host window (winit)
//         ↓
//   InputEvent (this module)
//         ↓
//   InputBuffer (batching) → channel → StateTracker
// ```
//
// Equality is tuned for batching: continuous events compare by identity
// (which pointer, which axis) and ignore their values, so a set keeps only
// the latest sample of each.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::hash::{Hash, Hasher};

//=== Identifiers =========================================================

/// Host-assigned finger identifier, stable for the duration of a touch.
pub type TouchId = u64;

/// Host-assigned gamepad slot.
pub type GamepadId = u32;

//=== MouseButton =========================================================

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,

    /// Any other button (macro or thumb buttons).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key, independent of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Function Keys ----------------------------------------------------
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Navigation -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Home,
    End,
    PageUp,
    PageDown,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// A key the host reported but this enum does not name.
    Unidentified,
}

//=== Gamepad Controls ====================================================

/// Gamepad button, named by position on a standard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    /// Bottom face button (A on Xbox, Cross on PlayStation).
    South,
    East,
    West,
    North,
    LeftBumper,
    RightBumper,
    LeftStick,
    RightStick,
    Select,
    Start,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Other,
}

/// Gamepad analog axis.
///
/// Stick axes range over `[-1, 1]` (positive is right and down); triggers
/// over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

//=== InputEvent ==========================================================

/// A single input sample from the host.
///
/// # Equality & Hashing Semantics
///
/// ```text
/// KeyDown{A, CTRL}        == KeyDown{A, CTRL}         ✓
/// KeyDown{A, CTRL}        == KeyDown{A, SHIFT}        ✗
/// MouseMoved{..}          == MouseMoved{..}           ✓ (position ignored)
/// TouchMove{id: 1, ..}    == TouchMove{id: 1, ..}     ✓
/// TouchMove{id: 1, ..}    == TouchMove{id: 2, ..}     ✗
/// GamepadAxisMoved{0, LX} == GamepadAxisMoved{0, LX}  ✓ (value ignored)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },

    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor position in pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Scroll in lines; positive `dy` scrolls up.
    MouseWheel { dx: f32, dy: f32 },

    TouchStart { id: TouchId, x: f32, y: f32 },
    TouchMove { id: TouchId, x: f32, y: f32 },
    TouchEnd { id: TouchId, x: f32, y: f32 },

    /// The host aborted the touch (palm rejection, focus loss).
    TouchCancel { id: TouchId, x: f32, y: f32 },

    GamepadConnected { id: GamepadId },
    GamepadDisconnected { id: GamepadId },
    GamepadButtonDown { id: GamepadId, button: GamepadButton },
    GamepadButtonUp { id: GamepadId, button: GamepadButton },
    GamepadAxisMoved { id: GamepadId, axis: GamepadAxis, value: f32 },

    /// Unsupported host event; ignored downstream.
    Unidentified,
}

/// How a batch treats repeated events of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coalescing {
    /// Kept in order; consecutive duplicates dropped.
    Ordered,

    /// Only the newest sample per identity survives.
    Latest,

    /// Deltas are summed.
    Accumulate,
}

impl InputEvent {
    /// Returns the event with `modifiers` applied (key and button events only).
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self {
            Self::KeyDown { modifiers: m, .. }
            | Self::KeyUp { modifiers: m, .. }
            | Self::MouseButtonDown { modifiers: m, .. }
            | Self::MouseButtonUp { modifiers: m, .. } => *m = modifiers,
            _ => {}
        }
        self
    }

    pub fn coalescing(&self) -> Coalescing {
        match self {
            Self::MouseMoved { .. } | Self::TouchMove { .. } | Self::GamepadAxisMoved { .. } => {
                Coalescing::Latest
            }
            Self::MouseWheel { .. } => Coalescing::Accumulate,
            _ => Coalescing::Ordered,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (MouseWheel { .. }, MouseWheel { .. }) => true,
            (TouchStart { id: a, .. }, TouchStart { id: b, .. })
            | (TouchMove { id: a, .. }, TouchMove { id: b, .. })
            | (TouchEnd { id: a, .. }, TouchEnd { id: b, .. })
            | (TouchCancel { id: a, .. }, TouchCancel { id: b, .. }) => a == b,
            (GamepadConnected { id: a }, GamepadConnected { id: b })
            | (GamepadDisconnected { id: a }, GamepadDisconnected { id: b }) => a == b,
            (
                GamepadButtonDown { id: a, button: ba },
                GamepadButtonDown { id: b, button: bb },
            )
            | (GamepadButtonUp { id: a, button: ba }, GamepadButtonUp { id: b, button: bb }) => {
                a == b && ba == bb
            }
            (
                GamepadAxisMoved { id: a, axis: xa, .. },
                GamepadAxisMoved { id: b, axis: xb, .. },
            ) => a == b && xa == xb,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes exactly the fields equality compares.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            Self::TouchStart { id, .. }
            | Self::TouchMove { id, .. }
            | Self::TouchEnd { id, .. }
            | Self::TouchCancel { id, .. } => id.hash(state),
            Self::GamepadConnected { id } | Self::GamepadDisconnected { id } => id.hash(state),
            Self::GamepadButtonDown { id, button } | Self::GamepadButtonUp { id, button } => {
                id.hash(state);
                button.hash(state);
            }
            Self::GamepadAxisMoved { id, axis, .. } => {
                id.hash(state);
                axis.hash(state);
            }
            Self::MouseMoved { .. } | Self::MouseWheel { .. } | Self::Unidentified => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier keys held during a key or button event.
///
/// Left and right variants are not distinguished. On macOS, Command maps
/// to `ctrl` and Option to `alt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self::new(false, false, false);
    pub const SHIFT: Self = Self::new(true, false, false);
    pub const CTRL: Self = Self::new(false, true, false);
    pub const ALT: Self = Self::new(false, false, true);

    pub const fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        Self { shift, ctrl, alt }
    }

    /// Whether no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
