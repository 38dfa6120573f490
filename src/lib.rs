//=========================================================================
// Stagecraft — Library Root
//
// A 2D game toolkit: a scene stack with animated transitions, input state
// tracking, layout sizers and tile geometry.
//
// Typical usage:
// ```no_run
// use stagecraft::prelude::*;
//
// let (mut stage, mut feed) = StageBuilder::new().build();
// // Hand `feed` to the window, register scenes on `stage.director_mut()`,
// // then call `stage.tick(dt)` once per frame.
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the Director, transitions, input, layout and tiles. It is
// usable on its own without a Stage or a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` translates winit window events and is exposed only through
// `InputFeed`. `stage` is the per-frame facade.
//
mod platform;
mod stage;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::{PlatformError, PlatformEvent, TickControl};
pub use platform::InputFeed;
pub use stage::{Stage, StageBuilder};
