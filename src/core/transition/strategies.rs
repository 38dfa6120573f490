//=========================================================================
// Transition Strategies
//=========================================================================
//
// Concrete transitions built from a tween clock and a choreography.
//
// Architecture:
//   Tweened<C>
//     ├─ clock: Tween (0 → 1, eased)
//     ├─ completion: Option<Completion>
//     └─ choreography: C  (Fade | Slide | Scroll | Zoom)
//
// A choreography maps eased progress `t` onto the two scene views. The
// terminal state is always `apply(1.0)`, so a forced completion and a
// natural finish leave identical views.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Completion, Transition, TransitionStage};
use crate::core::tween::{Easing, Tween};

//=== Choreography ========================================================

/// Maps eased progress onto scene views.
pub trait Choreography {
    /// Runs once at the start of every run, before the first `apply`.
    fn setup(&mut self, _stage: &mut TransitionStage<'_>) {}

    /// Poses both views at eased progress `t` (1.0 is the terminal pose).
    fn apply(&self, t: f32, stage: &mut TransitionStage<'_>);
}

//=== Tweened =============================================================

/// A [`Transition`] driving a [`Choreography`] with a tween clock.
pub struct Tweened<C> {
    choreography: C,
    clock: Tween,
    completion: Option<Completion>,
}

impl<C: Choreography> Tweened<C> {
    pub fn new(choreography: C, duration: Duration) -> Self {
        Self {
            choreography,
            clock: Tween::unit(duration),
            completion: None,
        }
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.clock = self.clock.with_easing(easing);
        self
    }

    pub fn easing(&self) -> Easing {
        self.clock.easing()
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.completion.is_some()
    }

    fn finish(&mut self, stage: &mut TransitionStage<'_>) {
        self.clock.finish();
        self.choreography.apply(1.0, stage);
        if let Some(completion) = self.completion.take() {
            completion.signal();
        }
    }
}

impl<C: Choreography> Transition for Tweened<C> {
    fn start(&mut self, stage: &mut TransitionStage<'_>, completion: Completion) {
        self.clock.reset();
        self.completion = Some(completion);
        self.choreography.setup(stage);
        self.choreography.apply(self.clock.value(), stage);

        if self.clock.is_finished() {
            self.finish(stage);
        }
    }

    fn update(&mut self, dt: Duration, stage: &mut TransitionStage<'_>) {
        if self.completion.is_none() {
            return;
        }

        let t = self.clock.advance(dt);
        self.choreography.apply(t, stage);

        if self.clock.is_finished() {
            self.finish(stage);
        }
    }

    fn complete(&mut self, stage: &mut TransitionStage<'_>) {
        self.finish(stage);
    }

    fn duration(&self) -> Duration {
        self.clock.duration()
    }
}

//=== Direction ===========================================================

/// Screen direction of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Full-stage displacement in this direction (y grows downward).
    fn offset(self, (width, height): (f32, f32)) -> (f32, f32) {
        match self {
            Self::Left => (-width, 0.0),
            Self::Right => (width, 0.0),
            Self::Up => (0.0, -height),
            Self::Down => (0.0, height),
        }
    }
}

//=== Fade ================================================================

/// Fades the incoming scene in above the outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    /// Also fade the outgoing scene out.
    pub fade_outgoing: bool,
}

impl Choreography for Fade {
    fn setup(&mut self, stage: &mut TransitionStage<'_>) {
        stage.incoming_on_top();
        stage.incoming.visible = true;
    }

    fn apply(&self, t: f32, stage: &mut TransitionStage<'_>) {
        stage.incoming.alpha = t.clamp(0.0, 1.0);
        if self.fade_outgoing {
            stage.outgoing.alpha = (1.0 - t).clamp(0.0, 1.0);
        }
    }
}

/// Fades the incoming scene in over `duration`.
pub fn fade(duration: Duration) -> Tweened<Fade> {
    Tweened::new(Fade { fade_outgoing: false }, duration)
}

/// Fades the incoming scene in while the outgoing one fades out.
pub fn crossfade(duration: Duration) -> Tweened<Fade> {
    Tweened::new(Fade { fade_outgoing: true }, duration)
}

//=== Slide ===============================================================

/// Moves the incoming scene in over a static outgoing scene.
///
/// The incoming scene starts one stage-length opposite `towards` and
/// travels in that direction until it rests at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub towards: Direction,
}

impl Choreography for Slide {
    fn setup(&mut self, stage: &mut TransitionStage<'_>) {
        stage.incoming_on_top();
        stage.incoming.visible = true;
    }

    fn apply(&self, t: f32, stage: &mut TransitionStage<'_>) {
        let (dx, dy) = self.towards.offset(stage.bounds);
        stage.incoming.set_position(dx * (t - 1.0), dy * (t - 1.0));
    }
}

/// Slides the incoming scene in, travelling `towards`.
pub fn slide(towards: Direction, duration: Duration) -> Tweened<Slide> {
    Tweened::new(Slide { towards }, duration)
}

//=== Scroll ==============================================================

/// Pushes the outgoing scene off-stage while the incoming one follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub towards: Direction,
}

impl Choreography for Scroll {
    fn setup(&mut self, stage: &mut TransitionStage<'_>) {
        stage.incoming.visible = true;
    }

    fn apply(&self, t: f32, stage: &mut TransitionStage<'_>) {
        let (dx, dy) = self.towards.offset(stage.bounds);
        stage.outgoing.set_position(dx * t, dy * t);
        stage.incoming.set_position(dx * (t - 1.0), dy * (t - 1.0));
    }
}

/// Scrolls both scenes `towards` one direction.
pub fn scroll(towards: Direction, duration: Duration) -> Tweened<Scroll> {
    Tweened::new(Scroll { towards }, duration)
}

//=== Zoom ================================================================

/// Grows the incoming scene from the stage center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    /// Also shrink the outgoing scene toward the center.
    pub shrink_outgoing: bool,
}

impl Zoom {
    /// Offset keeping a view of `scale` centered on the stage.
    fn centered(scale: f32, (width, height): (f32, f32)) -> (f32, f32) {
        ((1.0 - scale) * width / 2.0, (1.0 - scale) * height / 2.0)
    }
}

impl Choreography for Zoom {
    fn setup(&mut self, stage: &mut TransitionStage<'_>) {
        stage.incoming_on_top();
        stage.incoming.visible = true;
    }

    fn apply(&self, t: f32, stage: &mut TransitionStage<'_>) {
        let grow = t.max(0.0);
        let (x, y) = Self::centered(grow, stage.bounds);
        stage.incoming.scale = grow;
        stage.incoming.set_position(x, y);

        if self.shrink_outgoing {
            let shrink = (1.0 - t).max(0.0);
            let (x, y) = Self::centered(shrink, stage.bounds);
            stage.outgoing.scale = shrink;
            stage.outgoing.set_position(x, y);
        }
    }
}

/// Zooms the incoming scene in from nothing.
pub fn zoom(duration: Duration) -> Tweened<Zoom> {
    Tweened::new(Zoom { shrink_outgoing: false }, duration)
}

//=========================================================================
// Unit Tests
//=========================================================================
