//=========================================================================
// Core Systems
//=========================================================================
//
// Everything that runs on the tick side of the input channel.
//
// Architecture:
//   scene ──────── Director, Scene trait, scene requests
//     ├─ transition  strategies animating handoffs
//     │    └─ tween  easing curves and interpolation
//     └─ display     stacking order mirrored from the scene stack
//   input ──────── events, StateTracker, gamepads
//   platform_bridge  channel messages and the per-tick collector
//   layout ──────── box and grid sizers
//   tiles ───────── tile ↔ pixel math
//
//=========================================================================

//=== Module Declarations =================================================

pub mod display;
pub mod input;
pub mod layout;
pub mod platform_bridge;
pub mod scene;
pub mod tiles;
pub mod transition;
pub mod tween;
