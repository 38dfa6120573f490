//=========================================================================
// Transition Protocol
//=========================================================================
//
// Animated handoff between an outgoing and an incoming scene.
//
// Protocol:
// ```text
//   Director ──start(stage, completion)──> Transition
//   Director ──update(dt, stage)─────────> Transition   (every tick)
//   Transition ──completion.signal()─────> channel ──> Director settles
//   Director ──complete(stage)───────────> Transition   (eager flush / stall)
// ```
//
// `Completion` is a move-only token: a transition can signal at most once
// per run. The Director only settles the run whose serial matches.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::Sender;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::display::{make_top, DisplayTree, SceneView};
use crate::core::scene::SceneId;

//=== Module Declarations =================================================

mod strategies;

//=== Public API ==========================================================

pub use strategies::{
    crossfade, fade, scroll, slide, zoom, Choreography, Direction, Fade, Scroll, Slide, Tweened,
    Zoom,
};

//=== Transition Trait ====================================================

/// Strategy animating a handoff between two scenes.
///
/// A run begins with [`start`](Self::start) and ends when the strategy
/// calls [`Completion::signal`], either from [`update`](Self::update) once
/// its animation finishes or from [`complete`](Self::complete).
///
/// Implementations may be reused for sequential runs, never concurrent
/// ones. They must not panic from any method.
pub trait Transition {
    /// Begins a run. Keep `completion` and signal it exactly once.
    fn start(&mut self, stage: &mut TransitionStage<'_>, completion: Completion);

    /// Advances the animation by `dt`.
    fn update(&mut self, dt: Duration, stage: &mut TransitionStage<'_>);

    /// Jumps to the terminal state and signals if not done yet.
    ///
    /// Must leave both views exactly as a natural finish would, and must be
    /// safe to call after the run already finished.
    fn complete(&mut self, stage: &mut TransitionStage<'_>);

    /// Nominal run time.
    fn duration(&self) -> Duration;
}

//=== Completion ==========================================================

/// Signal sent to the Director when a run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransitionSignal {
    pub serial: u64,
}

/// One-shot completion token for a single transition run.
#[derive(Debug)]
pub struct Completion {
    serial: u64,
    sender: Sender<TransitionSignal>,
}

impl Completion {
    pub(crate) fn new(serial: u64, sender: Sender<TransitionSignal>) -> Self {
        Self { serial, sender }
    }

    /// Reports the run as finished.
    pub fn signal(self) {
        if self.sender.send(TransitionSignal { serial: self.serial }).is_err() {
            debug!("Transition run {} finished after its director was dropped", self.serial);
        }
    }

    /// Serial number of the run this token belongs to.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

//=== TransitionStage =====================================================

/// The two scene views a transition animates, plus stage geometry.
///
/// When the stack was empty before the handoff, `outgoing` is a detached
/// placeholder and changes to it are discarded.
pub struct TransitionStage<'a> {
    /// View of the scene being left.
    pub outgoing: SceneView,

    /// View of the scene being shown.
    pub incoming: SceneView,

    /// Stage width and height, used for off-screen offsets.
    pub bounds: (f32, f32),

    outgoing_id: Option<SceneId>,
    incoming_id: SceneId,
    display: &'a mut dyn DisplayTree,
}

impl<'a> TransitionStage<'a> {
    pub(crate) fn new(
        outgoing: Option<(SceneId, SceneView)>,
        incoming: (SceneId, SceneView),
        bounds: (f32, f32),
        display: &'a mut dyn DisplayTree,
    ) -> Self {
        Self {
            outgoing: outgoing.map(|(_, view)| view).unwrap_or_default(),
            incoming: incoming.1,
            bounds,
            outgoing_id: outgoing.map(|(id, _)| id),
            incoming_id: incoming.0,
            display,
        }
    }

    /// Whether a real outgoing scene takes part.
    pub fn has_outgoing(&self) -> bool {
        self.outgoing_id.is_some()
    }

    pub fn incoming_id(&self) -> SceneId {
        self.incoming_id
    }

    pub fn outgoing_id(&self) -> Option<SceneId> {
        self.outgoing_id
    }

    //--- Display Order ----------------------------------------------------

    /// Renders the incoming scene directly above the outgoing one.
    pub fn incoming_on_top(&mut self) -> bool {
        match self.outgoing_id {
            Some(out) => make_top(&mut *self.display, self.incoming_id, out),
            None => false,
        }
    }

    /// Renders the outgoing scene directly above the incoming one.
    pub fn outgoing_on_top(&mut self) -> bool {
        match self.outgoing_id {
            Some(out) => make_top(&mut *self.display, out, self.incoming_id),
            None => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
