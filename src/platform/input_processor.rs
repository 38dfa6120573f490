//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit window events into `InputEvent`s.
//
// Architecture:
//   WindowEvent → InputProcessor → Option<InputEvent> → InputBuffer
//
// Modifier state is sticky: `ModifiersChanged` updates a cache that is
// stamped onto every later key and button event. Keys outside the
// supported set are filtered (None).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta, TouchPhase, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton, TouchId};

//=== InputProcessor ======================================================

/// Converts winit events with stateful modifier tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    /// Pixels per wheel line when the host reports pixel deltas.
    const PIXELS_PER_LINE: f32 = 16.0;

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.current_modifiers = Modifiers::from(state);
    }

    //--- Event Processing -------------------------------------------------

    /// Translates one window event; `None` for events carrying no input.
    pub(crate) fn process_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.update_modifiers(modifiers.state());
                None
            }
            WindowEvent::KeyboardInput { event, .. } => self.process_key_event(event),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.process_mouse_button(*button, *state))
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.process_mouse_move(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.process_wheel(*delta)),
            WindowEvent::Touch(touch) => Some(self.process_touch(
                touch.phase,
                touch.id,
                touch.location.x as f32,
                touch.location.y as f32,
            )),
            _ => None,
        }
    }

    /// Converts a key event, filtering unmapped keys.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unidentified,
        };

        if key == KeyCode::Unidentified {
            trace!("Unmapped key {:?} ignored", key_event.physical_key);
            return None;
        }

        Some(self.key_event(key, key_event.state))
    }

    pub(crate) fn process_mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown {
                button,
                modifiers: self.current_modifiers,
            },
            ElementState::Released => InputEvent::MouseButtonUp {
                button,
                modifiers: self.current_modifiers,
            },
        }
    }

    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    /// Normalizes wheel deltas to lines.
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(dx, dy) => (dx, dy),
            MouseScrollDelta::PixelDelta(position) => (
                position.x as f32 / Self::PIXELS_PER_LINE,
                position.y as f32 / Self::PIXELS_PER_LINE,
            ),
        };
        InputEvent::MouseWheel { dx, dy }
    }

    pub(crate) fn process_touch(&self, phase: TouchPhase, id: TouchId, x: f32, y: f32) -> InputEvent {
        match phase {
            TouchPhase::Started => InputEvent::TouchStart { id, x, y },
            TouchPhase::Moved => InputEvent::TouchMove { id, x, y },
            TouchPhase::Ended => InputEvent::TouchEnd { id, x, y },
            TouchPhase::Cancelled => InputEvent::TouchCancel { id, x, y },
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_event(&self, key: KeyCode, state: ElementState) -> InputEvent {
        match state {
            ElementState::Pressed => InputEvent::KeyDown {
                key,
                modifiers: self.current_modifiers,
            },
            ElementState::Released => InputEvent::KeyUp {
                key,
                modifiers: self.current_modifiers,
            },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self::new(state.shift_key(), state.control_key(), state.alt_key())
    }
}

/// Maps the supported subset; everything else is `Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            W::Digit0 => Self::Digit0,
            W::Digit1 => Self::Digit1,
            W::Digit2 => Self::Digit2,
            W::Digit3 => Self::Digit3,
            W::Digit4 => Self::Digit4,
            W::Digit5 => Self::Digit5,
            W::Digit6 => Self::Digit6,
            W::Digit7 => Self::Digit7,
            W::Digit8 => Self::Digit8,
            W::Digit9 => Self::Digit9,

            W::KeyA => Self::KeyA,
            W::KeyB => Self::KeyB,
            W::KeyC => Self::KeyC,
            W::KeyD => Self::KeyD,
            W::KeyE => Self::KeyE,
            W::KeyF => Self::KeyF,
            W::KeyG => Self::KeyG,
            W::KeyH => Self::KeyH,
            W::KeyI => Self::KeyI,
            W::KeyJ => Self::KeyJ,
            W::KeyK => Self::KeyK,
            W::KeyL => Self::KeyL,
            W::KeyM => Self::KeyM,
            W::KeyN => Self::KeyN,
            W::KeyO => Self::KeyO,
            W::KeyP => Self::KeyP,
            W::KeyQ => Self::KeyQ,
            W::KeyR => Self::KeyR,
            W::KeyS => Self::KeyS,
            W::KeyT => Self::KeyT,
            W::KeyU => Self::KeyU,
            W::KeyV => Self::KeyV,
            W::KeyW => Self::KeyW,
            W::KeyX => Self::KeyX,
            W::KeyY => Self::KeyY,
            W::KeyZ => Self::KeyZ,

            W::F1 => Self::F1,
            W::F2 => Self::F2,
            W::F3 => Self::F3,
            W::F4 => Self::F4,
            W::F5 => Self::F5,
            W::F6 => Self::F6,
            W::F7 => Self::F7,
            W::F8 => Self::F8,
            W::F9 => Self::F9,
            W::F10 => Self::F10,
            W::F11 => Self::F11,
            W::F12 => Self::F12,

            W::ArrowUp => Self::ArrowUp,
            W::ArrowDown => Self::ArrowDown,
            W::ArrowLeft => Self::ArrowLeft,
            W::ArrowRight => Self::ArrowRight,
            W::Home => Self::Home,
            W::End => Self::End,
            W::PageUp => Self::PageUp,
            W::PageDown => Self::PageDown,

            W::Space => Self::Space,
            W::Enter => Self::Enter,
            W::Escape => Self::Escape,
            W::Tab => Self::Tab,
            W::Backspace => Self::Backspace,
            W::Delete => Self::Delete,

            _ => Self::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => Self::Left,
            WinitMouseButton::Right => Self::Right,
            WinitMouseButton::Middle => Self::Middle,
            WinitMouseButton::Back => Self::Back,
            WinitMouseButton::Forward => Self::Forward,
            WinitMouseButton::Other(_) => Self::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
