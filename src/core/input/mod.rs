//=========================================================================
// Input
//=========================================================================
//
// Device-independent input events and per-frame input state.
//
// Architecture:
//   InputEvent (event.rs)
//     ↓
//   StateTracker (state_tracker.rs)
//     ├─ keyboard / mouse / wheel / touch
//     └─ GamepadState (gamepad.rs, dead-zone normalization)
//
// The Stage feeds each tick's events through
// `clear() → process_events() → finalize_frame()` and hands the tracker to
// scenes through `Frame::input`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod gamepad;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{
    Coalescing, GamepadAxis, GamepadButton, GamepadId, InputEvent, KeyCode, Modifiers,
    MouseButton, TouchId,
};
pub use gamepad::{axial_dead_zone, radial_dead_zone, GamepadState};
pub use state_tracker::StateTracker;
