//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   Director
//     ├─ slots: HashMap<SceneId, SceneSlot>   (scene + state + view)
//     ├─ names: HashMap<String, SceneId>      (registry)
//     ├─ stack: Vec<SceneId> + current index
//     └─ in_flight: Option<Transition run>
//
// Flow:
//   update() → advance transition → Scene::update() → apply SceneRequests
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::display::SceneView;
use crate::core::input::StateTracker;

//=== Module Declarations =================================================

mod director;
mod requests;

//=== Public API ==========================================================

pub use director::{Director, DirectorConfig};
pub use requests::{SceneRequest, SceneRequests};

//=== Scene Trait =========================================================

/// Lifecycle hooks and per-tick logic of a scene.
///
/// Every hook has an empty default; a scene overrides the subset it needs.
/// The Director guarantees each `pre_*` hook precedes its counterpart and
/// that a scene sees
/// `pre_enter → enter → (pre_pause → pause → pre_resume → resume)* → pre_exit → exit`.
///
/// ```rust
/// # use stagecraft::prelude::*;
/// struct Title {
///     elapsed: std::time::Duration,
/// }
///
/// impl Scene for Title {
///     fn enter(&mut self) {
///         self.elapsed = std::time::Duration::ZERO;
///     }
///
///     fn update(&mut self, frame: &mut Frame<'_>) {
///         self.elapsed += frame.dt;
///     }
/// }
/// ```
pub trait Scene {
    /// Called once when the scene is handed to the Director.
    fn initialize(&mut self) {}

    /// About to become active via push or replace.
    fn pre_enter(&mut self) {}

    /// Became active. The scene is now started and unpaused.
    fn enter(&mut self) {}

    /// About to become active again after the scene above it leaves.
    fn pre_resume(&mut self) {}

    /// Active again.
    fn resume(&mut self) {}

    /// About to be covered by a pushed scene. Already marked paused.
    fn pre_pause(&mut self) {}

    /// Covered.
    fn pause(&mut self) {}

    /// About to be removed from the stack.
    fn pre_exit(&mut self) {}

    /// Removed. The scene is stopped and paused.
    fn exit(&mut self) {}

    /// Called every tick while started and not paused.
    fn update(&mut self, frame: &mut Frame<'_>);
}

//=== SceneId =============================================================

/// Handle to a scene owned by a [`Director`].
///
/// Issued by the Director that owns the scene; meaningless elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub(crate) u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}

//=== SceneRef ============================================================

/// Names a scene either by handle or by registered name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneRef {
    Id(SceneId),
    Name(String),
}

impl From<SceneId> for SceneRef {
    fn from(id: SceneId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for SceneRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for SceneRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "'{}'", name),
        }
    }
}

//=== SceneState ==========================================================

/// Lifecycle flags the Director maintains for each scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneState {
    /// Entered and not yet exited.
    pub started: bool,

    /// Covered, exited, or not yet entered.
    pub paused: bool,
}

impl SceneState {
    /// State of a scene that has never entered.
    pub const DORMANT: Self = Self {
        started: false,
        paused: true,
    };

    /// Whether the scene receives `update` calls.
    pub fn is_running(&self) -> bool {
        self.started && !self.paused
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::DORMANT
    }
}

//=== Frame ===============================================================

/// Per-tick context handed to [`Scene::update`].
pub struct Frame<'a> {
    /// Time since the previous tick.
    pub dt: Duration,

    /// Keyboard, mouse, touch and gamepad state for this tick.
    pub input: &'a StateTracker,

    /// The scene's own visual node.
    pub view: &'a mut SceneView,

    /// Stack operations to apply once every scene has updated.
    pub requests: &'a mut SceneRequests,

    /// The updating scene.
    pub id: SceneId,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_ref_from_conversions() {
        assert_eq!(SceneRef::from("menu"), SceneRef::Name("menu".to_string()));
        assert_eq!(SceneRef::from(String::from("menu")), SceneRef::Name("menu".to_string()));
        assert_eq!(SceneRef::from(SceneId(4)), SceneRef::Id(SceneId(4)));
    }

    #[test]
    fn scene_ref_display() {
        assert_eq!(SceneRef::from("menu").to_string(), "'menu'");
        assert_eq!(SceneRef::from(SceneId(4)).to_string(), "scene#4");
    }

    #[test]
    fn dormant_state_does_not_run() {
        let state = SceneState::default();
        assert_eq!(state, SceneState::DORMANT);
        assert!(!state.is_running());

        let running = SceneState { started: true, paused: false };
        assert!(running.is_running());
    }

    #[test]
    fn scene_with_only_update_is_valid() {
        struct Minimal(u32);
        impl Scene for Minimal {
            fn update(&mut self, _frame: &mut Frame<'_>) {
                self.0 += 1;
            }
        }

        let mut scene = Minimal(0);
        scene.initialize();
        scene.enter();
        scene.exit();
        assert_eq!(scene.0, 0);
    }
}
