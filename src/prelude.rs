//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Stage
pub use crate::platform::InputFeed;
pub use crate::stage::{Stage, StageBuilder};
pub use crate::core::platform_bridge::{PlatformError, TickControl};

// Scene system
pub use crate::core::scene::{
    Director, DirectorConfig, Frame, Scene, SceneId, SceneRef, SceneRequest, SceneRequests,
    SceneState,
};

// Transitions
pub use crate::core::transition::{
    crossfade, fade, scroll, slide, zoom, Choreography, Completion, Direction, Transition,
    TransitionStage, Tweened,
};
pub use crate::core::tween::{Easing, Tween};

// Display
pub use crate::core::display::{DisplayList, DisplayTree, SceneView};

// Input system
pub use crate::core::input::{
    GamepadAxis, GamepadButton, GamepadState, InputEvent, KeyCode, Modifiers, MouseButton,
    StateTracker,
};

// Layout and tiles
pub use crate::core::layout::{Alignment, BoxSizer, GridSizer, Layoutable, Padding, Rect};
pub use crate::core::tiles::{MapOrientation, StaggerAxis, StaggerIndex, TileGeometry};
