//=========================================================================
// Gamepad State
//=========================================================================
//
// Per-pad button and axis tracking with dead-zone normalization.
//
// Architecture:
//   GamepadState
//     └─ pads: HashMap<GamepadId, Pad>
//          ├─ buttons: down / pressed / released (HashSet)
//          └─ axes: raw values (HashMap<GamepadAxis, f32>)
//
// Raw axis values are stored untouched; the dead zone is applied on query
// so it can change without losing samples.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::debug;

//=== Internal Dependencies ===============================================

use super::event::{GamepadAxis, GamepadButton, GamepadId, InputEvent};

//=== Dead Zones ==========================================================

/// Normalizes a stick through a radial dead zone.
///
/// Magnitudes below `dead_zone` read as `(0, 0)`. Beyond it, the magnitude
/// ramps linearly from 0 at the dead-zone edge to 1 at full deflection,
/// keeping the direction and clamping at 1.
pub fn radial_dead_zone(x: f32, y: f32, dead_zone: f32) -> (f32, f32) {
    let magnitude = (x * x + y * y).sqrt();
    if magnitude <= dead_zone || magnitude == 0.0 {
        return (0.0, 0.0);
    }

    let scaled = ((magnitude - dead_zone) / (1.0 - dead_zone)).min(1.0);
    let factor = scaled / magnitude;
    (x * factor, y * factor)
}

/// Single-axis form of [`radial_dead_zone`], used for triggers.
pub fn axial_dead_zone(value: f32, dead_zone: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude <= dead_zone {
        return 0.0;
    }
    let scaled = ((magnitude - dead_zone) / (1.0 - dead_zone)).min(1.0);
    scaled.copysign(value)
}

//=== Pad =================================================================

#[derive(Debug, Default)]
struct Pad {
    buttons_down: HashSet<GamepadButton>,
    pressed_this_frame: HashSet<GamepadButton>,
    released_this_frame: HashSet<GamepadButton>,
    axes: HashMap<GamepadAxis, f32>,
}

impl Pad {
    fn axis(&self, axis: GamepadAxis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }
}

//=== GamepadState ========================================================

/// Connected gamepads and their controls.
#[derive(Debug)]
pub struct GamepadState {
    pads: HashMap<GamepadId, Pad>,
    dead_zone: f32,
}

impl GamepadState {
    /// Default stick and trigger dead zone.
    pub const DEFAULT_DEAD_ZONE: f32 = 0.15;

    /// # Panics
    ///
    /// Panics if `dead_zone` is outside `[0, 1)`.
    pub fn new(dead_zone: f32) -> Self {
        assert!(
            (0.0..1.0).contains(&dead_zone),
            "Dead zone must be in [0, 1), got {}",
            dead_zone
        );
        Self {
            pads: HashMap::new(),
            dead_zone,
        }
    }

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears per-frame button transitions.
    pub(super) fn clear(&mut self) {
        for pad in self.pads.values_mut() {
            pad.pressed_this_frame.clear();
            pad.released_this_frame.clear();
        }
    }

    /// Applies a gamepad event; other events are ignored.
    pub(super) fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::GamepadConnected { id } => {
                debug!("Gamepad {} connected", id);
                self.pads.entry(id).or_default();
            }
            InputEvent::GamepadDisconnected { id } => {
                debug!("Gamepad {} disconnected", id);
                self.pads.remove(&id);
            }
            InputEvent::GamepadButtonDown { id, button } => {
                let pad = self.pads.entry(id).or_default();
                if pad.buttons_down.insert(button) {
                    pad.pressed_this_frame.insert(button);
                }
            }
            InputEvent::GamepadButtonUp { id, button } => {
                if let Some(pad) = self.pads.get_mut(&id) {
                    if pad.buttons_down.remove(&button) {
                        pad.released_this_frame.insert(button);
                    }
                }
            }
            InputEvent::GamepadAxisMoved { id, axis, value } => {
                let pad = self.pads.entry(id).or_default();
                pad.axes.insert(axis, value.clamp(-1.0, 1.0));
            }
            _ => {}
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Connected pad ids, in no particular order.
    pub fn connected(&self) -> impl Iterator<Item = GamepadId> + '_ {
        self.pads.keys().copied()
    }

    pub fn is_connected(&self, id: GamepadId) -> bool {
        self.pads.contains_key(&id)
    }

    pub fn is_button_pressed(&self, id: GamepadId, button: GamepadButton) -> bool {
        self.pads
            .get(&id)
            .map_or(false, |pad| pad.pressed_this_frame.contains(&button))
    }

    pub fn is_button_down(&self, id: GamepadId, button: GamepadButton) -> bool {
        self.pads
            .get(&id)
            .map_or(false, |pad| pad.buttons_down.contains(&button))
    }

    pub fn is_button_released(&self, id: GamepadId, button: GamepadButton) -> bool {
        self.pads
            .get(&id)
            .map_or(false, |pad| pad.released_this_frame.contains(&button))
    }

    /// Raw axis value without dead-zone processing.
    pub fn axis(&self, id: GamepadId, axis: GamepadAxis) -> f32 {
        self.pads.get(&id).map_or(0.0, |pad| pad.axis(axis))
    }

    /// Left stick through the radial dead zone.
    pub fn left_stick(&self, id: GamepadId) -> (f32, f32) {
        self.stick(id, GamepadAxis::LeftStickX, GamepadAxis::LeftStickY)
    }

    /// Right stick through the radial dead zone.
    pub fn right_stick(&self, id: GamepadId) -> (f32, f32) {
        self.stick(id, GamepadAxis::RightStickX, GamepadAxis::RightStickY)
    }

    pub fn left_trigger(&self, id: GamepadId) -> f32 {
        axial_dead_zone(self.axis(id, GamepadAxis::LeftTrigger), self.dead_zone)
    }

    pub fn right_trigger(&self, id: GamepadId) -> f32 {
        axial_dead_zone(self.axis(id, GamepadAxis::RightTrigger), self.dead_zone)
    }

    fn stick(&self, id: GamepadId, x: GamepadAxis, y: GamepadAxis) -> (f32, f32) {
        match self.pads.get(&id) {
            Some(pad) => radial_dead_zone(pad.axis(x), pad.axis(y), self.dead_zone),
            None => (0.0, 0.0),
        }
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEAD_ZONE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
