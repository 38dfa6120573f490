//=========================================================================
// Director
//=========================================================================
//
// Stack-based scene state machine with animated handoffs.
//
// The Director owns every scene it is given, keeps an ordered stack of
// scene handles plus a current index, and mirrors that order into a host
// display tree. Stack operations run pre-hooks immediately, optionally
// animate through a `Transition`, and run post-hooks once the transition
// signals completion.
//
// Lifecycle per operation:
// ```text
//   push     cur.pre_pause, new.pre_enter   → [transition] → cur.pause, new.enter
//   pop      cur.pre_exit,  prev.pre_resume → [transition] → cur.exit,  prev.resume
//   replace  cur.pre_exit,  new.pre_enter   → [transition] → cur.exit,  new.enter
// ```
//
// At most one transition runs at a time. A new operation force-completes
// the one in flight and settles it before its own pre-hooks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Frame, Scene, SceneId, SceneRef, SceneRequest, SceneRequests, SceneState};
use crate::core::display::{self, DisplayList, DisplayTree, SceneView};
use crate::core::input::StateTracker;
use crate::core::transition::{Completion, Transition, TransitionSignal, TransitionStage};

//=== DirectorConfig ======================================================

/// Director tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectorConfig {
    /// Stage width and height handed to transitions.
    pub bounds: (f32, f32),

    /// Time past a transition's duration before it is force-completed.
    pub grace: Duration,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            bounds: (800.0, 600.0),
            grace: Duration::from_secs(1),
        }
    }
}

//=== Internal Types ======================================================

struct SceneSlot {
    scene: Box<dyn Scene>,
    state: SceneState,
    view: SceneView,
    /// Registry name; anonymous slots are dropped on exit.
    name: Option<String>,
}

/// Post-hook work deferred until a transition completes.
#[derive(Debug, Clone, Copy)]
enum Handoff {
    Replace {
        outgoing: Option<SceneId>,
        incoming: SceneId,
        resumes: bool,
    },
    Push {
        outgoing: Option<SceneId>,
        incoming: SceneId,
    },
    Pop {
        outgoing: SceneId,
        resumed: SceneId,
    },
}

impl Handoff {
    /// The (outgoing, incoming) pair a transition animates.
    fn pair(&self) -> (Option<SceneId>, SceneId) {
        match *self {
            Self::Replace { outgoing, incoming, .. } => (outgoing, incoming),
            Self::Push { outgoing, incoming } => (outgoing, incoming),
            Self::Pop { outgoing, resumed } => (Some(outgoing), resumed),
        }
    }
}

struct InFlight {
    serial: u64,
    transition: Box<dyn Transition>,
    handoff: Handoff,
    elapsed: Duration,
}

//=== Director ============================================================

/// Owns scenes and switches between them.
///
/// Every operation returns whether it did anything; invalid requests are
/// logged and ignored.
///
/// ```rust
/// # use stagecraft::prelude::*;
/// # struct Menu;
/// # impl Scene for Menu { fn update(&mut self, _frame: &mut Frame<'_>) {} }
/// # struct Level;
/// # impl Scene for Level { fn update(&mut self, _frame: &mut Frame<'_>) {} }
/// let mut director = Director::new();
/// director.add("menu", Menu);
/// director.add("level", Level);
///
/// assert!(director.push("menu"));
/// assert!(director.replace_with("level", fade(std::time::Duration::from_millis(300))));
/// assert!(director.in_transition());
/// ```
pub struct Director<D: DisplayTree = DisplayList> {
    slots: HashMap<SceneId, SceneSlot>,
    names: HashMap<String, SceneId>,
    stack: Vec<SceneId>,
    current: Option<usize>,
    in_flight: Option<InFlight>,
    signal_tx: Sender<TransitionSignal>,
    signal_rx: Receiver<TransitionSignal>,
    requests: SceneRequests,
    display: D,
    config: DirectorConfig,
    next_id: u32,
    next_serial: u64,
}

impl Director<DisplayList> {
    /// Creates a Director with an in-memory display list.
    pub fn new() -> Self {
        Self::with_config(DirectorConfig::default())
    }

    pub fn with_config(config: DirectorConfig) -> Self {
        Self::with_display(DisplayList::new(), config)
    }
}

impl Default for Director<DisplayList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplayTree> Director<D> {
    //--- Construction -----------------------------------------------------

    /// Creates a Director mirroring its stack into `display`.
    pub fn with_display(display: D, config: DirectorConfig) -> Self {
        let (signal_tx, signal_rx) = unbounded();
        Self {
            slots: HashMap::new(),
            names: HashMap::new(),
            stack: Vec::new(),
            current: None,
            in_flight: None,
            signal_tx,
            signal_rx,
            requests: SceneRequests::new(),
            display,
            config,
            next_id: 0,
            next_serial: 0,
        }
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    //--- Registry ---------------------------------------------------------

    /// Hands a named scene to the Director and calls its `initialize`.
    ///
    /// Re-using a name rebinds it to the new scene; the old scene stays
    /// alive only while it is on the stack.
    pub fn add(&mut self, name: impl Into<String>, scene: impl Scene + 'static) -> SceneId {
        let name = name.into();
        let id = self.insert_slot(Box::new(scene), Some(name.clone()));

        if let Some(previous) = self.names.insert(name.clone(), id) {
            warn!("Scene name '{}' was already registered and has been rebound", name);
            self.release(previous);
        }

        debug!("Added scene '{}' as {}", name, id);
        id
    }

    /// Hands an anonymous scene to the Director.
    ///
    /// Anonymous scenes are dropped once they exit the stack.
    pub fn spawn(&mut self, scene: impl Scene + 'static) -> SceneId {
        let id = self.insert_slot(Box::new(scene), None);
        debug!("Spawned anonymous scene {}", id);
        id
    }

    /// Unregisters a name. A scene still on the stack lives until it exits.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.remove(name) {
            Some(id) => {
                debug!("Removed scene '{}' ({})", name, id);
                self.release(id);
                true
            }
            None => {
                debug!("Cannot remove unknown scene '{}'", name);
                false
            }
        }
    }

    /// Resolves a handle or name to a live scene.
    pub fn get(&self, scene: impl Into<SceneRef>) -> Option<SceneId> {
        self.resolve(&scene.into())
    }

    fn resolve(&self, scene: &SceneRef) -> Option<SceneId> {
        match scene {
            SceneRef::Id(id) => self.slots.contains_key(id).then_some(*id),
            SceneRef::Name(name) => self.names.get(name).copied(),
        }
    }

    fn insert_slot(&mut self, mut scene: Box<dyn Scene>, name: Option<String>) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;

        scene.initialize();
        self.slots.insert(
            id,
            SceneSlot {
                scene,
                state: SceneState::DORMANT,
                view: SceneView::IDENTITY,
                name,
            },
        );
        id
    }

    /// Drops a slot that lost its name, or marks it anonymous if stacked.
    fn release(&mut self, id: SceneId) {
        if self.stack.contains(&id) {
            if let Some(slot) = self.slots.get_mut(&id) {
                slot.name = None;
            }
        } else {
            self.slots.remove(&id);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The active scene, if any.
    pub fn current_scene(&self) -> Option<SceneId> {
        self.current.and_then(|index| self.stack.get(index).copied())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Stacked scenes, bottom first.
    pub fn stack(&self) -> &[SceneId] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn state(&self, id: SceneId) -> Option<SceneState> {
        self.slots.get(&id).map(|slot| slot.state)
    }

    pub fn view(&self, id: SceneId) -> Option<SceneView> {
        self.slots.get(&id).map(|slot| slot.view)
    }

    /// Registry name of a scene.
    pub fn name(&self, id: SceneId) -> Option<&str> {
        self.slots.get(&id).and_then(|slot| slot.name.as_deref())
    }

    /// Whether a transition is in flight.
    pub fn in_transition(&self) -> bool {
        self.in_flight.is_some()
    }

    //--- Stack Operations -------------------------------------------------

    /// Covers the current scene with `scene`.
    pub fn push(&mut self, scene: impl Into<SceneRef>) -> bool {
        self.push_scene(scene.into(), None)
    }

    pub fn push_with(&mut self, scene: impl Into<SceneRef>, transition: impl Transition + 'static) -> bool {
        self.push_scene(scene.into(), Some(Box::new(transition)))
    }

    /// Exits the current scene and resumes the one below it.
    pub fn pop(&mut self) -> bool {
        self.pop_scene(None)
    }

    pub fn pop_with(&mut self, transition: impl Transition + 'static) -> bool {
        self.pop_scene(Some(Box::new(transition)))
    }

    /// Exits the current scene in favor of `scene`.
    pub fn replace(&mut self, scene: impl Into<SceneRef>) -> bool {
        self.replace_scene(scene.into(), None)
    }

    pub fn replace_with(&mut self, scene: impl Into<SceneRef>, transition: impl Transition + 'static) -> bool {
        self.replace_scene(scene.into(), Some(Box::new(transition)))
    }

    /// Exits every scene, top-down. No transition.
    pub fn pop_all(&mut self) -> bool {
        self.flush();
        let popped = self.exit_all_but(0);
        self.current = None;
        popped
    }

    /// Exits every scene except the topmost. No transition.
    pub fn pop_all_but_one(&mut self) -> bool {
        self.flush();
        let popped = self.exit_all_but(1);
        self.current = if self.stack.is_empty() { None } else { Some(0) };
        popped
    }

    /// Ensures scene `a` renders above scene `b`; no-op if it already does.
    pub fn make_top(&mut self, a: SceneId, b: SceneId) -> bool {
        display::make_top(&mut self.display, a, b)
    }

    fn push_scene(&mut self, target: SceneRef, transition: Option<Box<dyn Transition>>) -> bool {
        self.flush();

        let Some(incoming) = self.resolve(&target) else {
            warn!("Cannot push unknown scene {}", target);
            return false;
        };
        let outgoing = self.current_scene();
        if outgoing == Some(incoming) {
            debug!("Scene {} is already current", incoming);
            return false;
        }
        if self.stack.contains(&incoming) {
            warn!("Scene {} is already in the stack", incoming);
            return false;
        }

        if let Some(outgoing) = outgoing {
            self.pre_pause(outgoing);
        }
        self.insert_above_current(incoming, outgoing);
        self.with_scene(incoming, |scene| scene.pre_enter());

        debug!("Pushing {} over {:?}", incoming, outgoing);
        self.begin(Handoff::Push { outgoing, incoming }, transition);
        true
    }

    fn pop_scene(&mut self, transition: Option<Box<dyn Transition>>) -> bool {
        self.flush();

        let Some(index) = self.current else {
            debug!("Cannot pop an empty stack");
            return false;
        };
        if index == 0 {
            debug!("Cannot pop the last scene on the stack");
            return false;
        }

        let outgoing = self.stack[index];
        let resumed = self.stack[index - 1];
        self.with_scene(outgoing, |scene| scene.pre_exit());
        self.with_scene(resumed, |scene| scene.pre_resume());

        debug!("Popping {} back to {}", outgoing, resumed);
        self.begin(Handoff::Pop { outgoing, resumed }, transition);
        true
    }

    fn replace_scene(&mut self, target: SceneRef, transition: Option<Box<dyn Transition>>) -> bool {
        self.flush();

        let Some(incoming) = self.resolve(&target) else {
            warn!("Cannot replace with unknown scene {}", target);
            return false;
        };
        let outgoing = self.current_scene();
        if outgoing == Some(incoming) {
            debug!("Scene {} is already current", incoming);
            return false;
        }

        if let Some(outgoing) = outgoing {
            self.with_scene(outgoing, |scene| scene.pre_exit());
        }

        // Reinsertion guard: never keep two stack entries for one scene.
        if let Some(pos) = self.stack.iter().position(|&id| id == incoming) {
            self.stack.remove(pos);
            if let Some(index) = self.current {
                if pos < index {
                    self.current = Some(index - 1);
                }
            }
            self.display.remove_child(incoming);
            debug!("Moved {} up from stack position {}", incoming, pos);
        }
        self.insert_above_current(incoming, outgoing);

        let resumes = self.state(incoming).map_or(false, |state| state.started);
        if resumes {
            self.with_scene(incoming, |scene| scene.pre_resume());
        } else {
            self.with_scene(incoming, |scene| scene.pre_enter());
        }

        debug!("Replacing {:?} with {}", outgoing, incoming);
        self.begin(Handoff::Replace { outgoing, incoming, resumes }, transition);
        true
    }

    fn insert_above_current(&mut self, id: SceneId, below: Option<SceneId>) {
        let index = self.current.map_or(0, |index| index + 1);
        self.stack.insert(index, id);

        match below.and_then(|below| self.display.child_index(below)) {
            Some(child) => self.display.add_child_at(id, child + 1),
            None => self.display.add_child(id),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the active transition, updates running scenes bottom to
    /// top, then applies the requests they queued.
    pub fn update(&mut self, dt: Duration, input: &StateTracker) {
        self.advance_transition(dt);

        for index in 0..self.stack.len() {
            let id = self.stack[index];
            let Some(slot) = self.slots.get_mut(&id) else {
                continue;
            };
            if !slot.state.is_running() {
                continue;
            }

            let mut frame = Frame {
                dt,
                input,
                view: &mut slot.view,
                requests: &mut self.requests,
                id,
            };
            slot.scene.update(&mut frame);
        }

        self.apply_requests();
    }

    fn apply_requests(&mut self) {
        for request in self.requests.take() {
            debug!("Applying scene request {:?}", request);
            let applied = match request {
                SceneRequest::Push(target, transition) => self.push_scene(target, transition),
                SceneRequest::Pop(transition) => self.pop_scene(transition),
                SceneRequest::Replace(target, transition) => self.replace_scene(target, transition),
                SceneRequest::PopAll => self.pop_all(),
                SceneRequest::PopAllButOne => self.pop_all_but_one(),
            };
            if !applied {
                debug!("Scene request had no effect");
            }
        }
    }

    //--- Transition Runs --------------------------------------------------

    fn begin(&mut self, handoff: Handoff, transition: Option<Box<dyn Transition>>) {
        let (outgoing, incoming) = handoff.pair();
        if let Some(slot) = self.slots.get_mut(&incoming) {
            slot.view = SceneView::IDENTITY;
        }

        let Some(mut transition) = transition else {
            self.settle(handoff);
            return;
        };

        let serial = self.next_serial;
        self.next_serial += 1;
        let completion = Completion::new(serial, self.signal_tx.clone());
        self.with_stage(outgoing, incoming, |stage| transition.start(stage, completion));

        if self.take_signal(serial) {
            debug!("Transition run {} finished during start", serial);
            self.settle(handoff);
            return;
        }

        debug!("Started transition run {} ({:?})", serial, transition.duration());
        self.in_flight = Some(InFlight {
            serial,
            transition,
            handoff,
            elapsed: Duration::ZERO,
        });
    }

    fn advance_transition(&mut self, dt: Duration) {
        let Some(mut run) = self.in_flight.take() else {
            return;
        };
        run.elapsed = run.elapsed.saturating_add(dt);

        let (outgoing, incoming) = run.handoff.pair();
        let transition = &mut run.transition;
        self.with_stage(outgoing, incoming, |stage| transition.update(dt, stage));

        if self.take_signal(run.serial) {
            debug!("Transition run {} finished", run.serial);
            self.settle(run.handoff);
        } else if run.elapsed > run.transition.duration().saturating_add(self.config.grace) {
            warn!(
                "Transition run {} stalled after {:?}; forcing completion",
                run.serial, run.elapsed
            );
            self.force_complete(run);
        } else {
            self.in_flight = Some(run);
        }
    }

    /// Eager flush: settle any in-flight run before a new operation.
    fn flush(&mut self) {
        if let Some(run) = self.in_flight.take() {
            debug!("Flushing transition run {}", run.serial);
            self.force_complete(run);
        }
    }

    fn force_complete(&mut self, mut run: InFlight) {
        let (outgoing, incoming) = run.handoff.pair();
        let transition = &mut run.transition;
        self.with_stage(outgoing, incoming, |stage| transition.complete(stage));

        if !self.take_signal(run.serial) {
            warn!(
                "Transition run {} did not signal on complete(); settling anyway",
                run.serial
            );
        }
        self.settle(run.handoff);
    }

    /// Lends both views to a transition and writes them back afterwards.
    fn with_stage<R>(
        &mut self,
        outgoing: Option<SceneId>,
        incoming: SceneId,
        f: impl FnOnce(&mut TransitionStage<'_>) -> R,
    ) -> R {
        let outgoing = outgoing.and_then(|id| self.slots.get(&id).map(|slot| (id, slot.view)));
        let incoming_view = self
            .slots
            .get(&incoming)
            .map(|slot| slot.view)
            .unwrap_or_default();

        let mut stage = TransitionStage::new(
            outgoing,
            (incoming, incoming_view),
            self.config.bounds,
            &mut self.display,
        );
        let result = f(&mut stage);
        let (outgoing_view, incoming_view) = (stage.outgoing, stage.incoming);

        if let Some((id, _)) = outgoing {
            if let Some(slot) = self.slots.get_mut(&id) {
                slot.view = outgoing_view;
            }
        }
        if let Some(slot) = self.slots.get_mut(&incoming) {
            slot.view = incoming_view;
        }
        result
    }

    /// Drains the signal channel; true if `serial` signalled.
    fn take_signal(&self, serial: u64) -> bool {
        let mut signalled = false;
        for signal in self.signal_rx.try_iter() {
            if signal.serial == serial {
                signalled = true;
            } else {
                debug!("Ignoring stale signal from transition run {}", signal.serial);
            }
        }
        signalled
    }

    //--- Settling ---------------------------------------------------------

    /// Runs the post-hooks of a handoff.
    fn settle(&mut self, handoff: Handoff) {
        match handoff {
            Handoff::Replace { outgoing, incoming, resumes } => {
                if let Some(outgoing) = outgoing {
                    self.exit_scene(outgoing);
                }
                self.make_current(incoming);
                if resumes {
                    self.resume_scene(incoming);
                } else {
                    self.enter_scene(incoming);
                }
            }
            Handoff::Push { outgoing, incoming } => {
                if let Some(outgoing) = outgoing {
                    self.with_scene(outgoing, |scene| scene.pause());
                }
                self.make_current(incoming);
                self.enter_scene(incoming);
            }
            Handoff::Pop { outgoing, resumed } => {
                self.exit_scene(outgoing);
                self.make_current(resumed);
                self.resume_scene(resumed);
            }
        }
    }

    fn make_current(&mut self, id: SceneId) {
        self.current = self.stack.iter().position(|&s| s == id);
        debug!("Current scene is {} at {:?}", id, self.current);
    }

    /// Exits every stacked scene except the top `keep`, top-down.
    fn exit_all_but(&mut self, keep: usize) -> bool {
        let doomed: Vec<SceneId> = self.stack.iter().rev().skip(keep).copied().collect();
        for &id in &doomed {
            self.with_scene(id, |scene| scene.pre_exit());
            self.exit_scene(id);
        }
        !doomed.is_empty()
    }

    //--- Lifecycle --------------------------------------------------------

    fn with_scene(&mut self, id: SceneId, f: impl FnOnce(&mut dyn Scene)) {
        if let Some(slot) = self.slots.get_mut(&id) {
            f(slot.scene.as_mut());
        }
    }

    fn pre_pause(&mut self, id: SceneId) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.state.paused = true;
            slot.scene.pre_pause();
        }
    }

    fn enter_scene(&mut self, id: SceneId) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.scene.enter();
            slot.state = SceneState {
                started: true,
                paused: false,
            };
        }
    }

    fn resume_scene(&mut self, id: SceneId) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.scene.resume();
            slot.state.paused = false;
        }
    }

    /// Runs `exit`, detaches the scene and drops it if anonymous.
    fn exit_scene(&mut self, id: SceneId) {
        if let Some(pos) = self.stack.iter().position(|&s| s == id) {
            self.stack.remove(pos);
            if let Some(index) = self.current {
                if pos <= index {
                    self.current = index.checked_sub(1);
                }
            }
        }
        self.display.remove_child(id);

        let anonymous = match self.slots.get_mut(&id) {
            Some(slot) => {
                slot.scene.exit();
                slot.state = SceneState::DORMANT;
                slot.view = SceneView::IDENTITY;
                slot.name.is_none()
            }
            None => false,
        };
        if anonymous {
            self.slots.remove(&id);
            debug!("Dropped anonymous scene {}", id);
        }
        debug!("Exited {}", id);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::fade;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every hook as "name.hook".
    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn record(&self, hook: &str) {
            self.log.borrow_mut().push(format!("{}.{}", self.name, hook));
        }
    }

    impl Scene for Recorder {
        fn initialize(&mut self) {
            self.record("initialize");
        }
        fn pre_enter(&mut self) {
            self.record("pre_enter");
        }
        fn enter(&mut self) {
            self.record("enter");
        }
        fn pre_resume(&mut self) {
            self.record("pre_resume");
        }
        fn resume(&mut self) {
            self.record("resume");
        }
        fn pre_pause(&mut self) {
            self.record("pre_pause");
        }
        fn pause(&mut self) {
            self.record("pause");
        }
        fn pre_exit(&mut self) {
            self.record("pre_exit");
        }
        fn exit(&mut self) {
            self.record("exit");
        }
        fn update(&mut self, _frame: &mut Frame<'_>) {
            self.record("update");
        }
    }

    /// Transition whose completion the test controls.
    #[derive(Clone, Default)]
    struct Manual {
        completion: Rc<RefCell<Option<Completion>>>,
        completes: Rc<Cell<u32>>,
        duration: Duration,
        silent: bool,
    }

    impl Manual {
        fn lasting(duration: Duration) -> Self {
            Self { duration, ..Self::default() }
        }

        fn silent() -> Self {
            Self { silent: true, ..Self::default() }
        }

        fn finish(&self) {
            if let Some(completion) = self.completion.borrow_mut().take() {
                completion.signal();
            }
        }
    }

    impl Transition for Manual {
        fn start(&mut self, _stage: &mut TransitionStage<'_>, completion: Completion) {
            *self.completion.borrow_mut() = Some(completion);
        }

        fn update(&mut self, _dt: Duration, _stage: &mut TransitionStage<'_>) {}

        fn complete(&mut self, _stage: &mut TransitionStage<'_>) {
            self.completes.set(self.completes.get() + 1);
            if !self.silent {
                self.finish();
            }
        }

        fn duration(&self) -> Duration {
            self.duration
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn lifecycle(log: &Log) -> Vec<String> {
        log.borrow()
            .iter()
            .filter(|entry| !entry.ends_with(".update") && !entry.ends_with(".initialize"))
            .cloned()
            .collect()
    }

    fn of(log: &Log, name: &str) -> Vec<String> {
        let prefix = format!("{}.", name);
        lifecycle(log)
            .into_iter()
            .filter(|entry| entry.starts_with(&prefix))
            .collect()
    }

    /// Director with scenes "a".."d" registered.
    fn setup() -> (Director, Log, [SceneId; 4]) {
        let log = Log::default();
        let mut director = Director::new();
        let ids = ["a", "b", "c", "d"].map(|name| {
            director.add(name, Recorder { name, log: Rc::clone(&log) })
        });
        (director, log, ids)
    }

    fn running(director: &Director, id: SceneId) -> bool {
        director.state(id).map_or(false, |state| state.is_running())
    }

    //--- Scenarios --------------------------------------------------------

    #[test]
    fn push_onto_empty_stack_enters_immediately() {
        let (mut director, log, [a, ..]) = setup();

        assert!(director.push("a"));

        assert_eq!(lifecycle(&log), vec!["a.pre_enter", "a.enter"]);
        assert_eq!(director.current_index(), Some(0));
        assert_eq!(director.current_scene(), Some(a));
        assert!(director.state(a).map_or(false, |s| s.started));
        assert!(!director.in_transition());
    }

    #[test]
    fn push_with_transition_defers_post_hooks() {
        let (mut director, log, [a, b, ..]) = setup();
        let input = StateTracker::new();
        director.push("a");
        log.borrow_mut().clear();

        let x = Manual::default();
        assert!(director.push_with("b", x.clone()));
        assert!(director.in_transition());
        assert_eq!(lifecycle(&log), vec!["a.pre_pause", "b.pre_enter"]);

        director.update(ms(16), &input);
        assert!(director.in_transition());

        x.finish();
        director.update(ms(16), &input);

        assert!(!director.in_transition());
        assert_eq!(
            lifecycle(&log),
            vec!["a.pre_pause", "b.pre_enter", "a.pause", "b.enter"]
        );
        assert_eq!(director.stack(), &[a, b]);
        assert_eq!(director.current_index(), Some(1));
        assert!(director.state(a).map_or(false, |s| s.paused));
        assert!(running(&director, b));
    }

    #[test]
    fn replace_with_transition_defers_post_hooks() {
        let (mut director, log, [a, _, c, _]) = setup();
        let input = StateTracker::new();
        director.push("a");
        director.push("b");
        log.borrow_mut().clear();

        let x = Manual::default();
        assert!(director.replace_with("c", x.clone()));
        assert!(director.in_transition());

        director.update(ms(16), &input);
        assert_eq!(lifecycle(&log), vec!["b.pre_exit", "c.pre_enter"]);

        x.finish();
        director.update(ms(16), &input);

        assert!(!director.in_transition());
        assert_eq!(
            lifecycle(&log),
            vec!["b.pre_exit", "c.pre_enter", "b.exit", "c.enter"]
        );
        assert_eq!(director.stack(), &[a, c]);
        assert_eq!(director.current_index(), Some(1));
        assert!(running(&director, c));
    }

    #[test]
    fn pop_with_transition_defers_post_hooks() {
        let (mut director, log, [a, _, c, _]) = setup();
        let input = StateTracker::new();
        director.push("a");
        director.push("c");
        log.borrow_mut().clear();

        let x = Manual::default();
        assert!(director.pop_with(x.clone()));
        assert!(director.in_transition());

        director.update(ms(16), &input);
        assert_eq!(lifecycle(&log), vec!["c.pre_exit", "a.pre_resume"]);

        x.finish();
        director.update(ms(16), &input);

        assert!(!director.in_transition());
        assert_eq!(
            lifecycle(&log),
            vec!["c.pre_exit", "a.pre_resume", "c.exit", "a.resume"]
        );
        assert_eq!(director.stack(), &[a]);
        assert_eq!(director.current_index(), Some(0));
        assert!(running(&director, a));
    }

    #[test]
    fn pop_without_transition_resumes_previous() {
        let (mut director, log, [a, ..]) = setup();
        director.push("a");
        director.push("b");
        log.borrow_mut().clear();

        assert!(director.pop());

        assert_eq!(
            lifecycle(&log),
            vec!["b.pre_exit", "a.pre_resume", "b.exit", "a.resume"]
        );
        assert_eq!(director.stack(), &[a]);
        assert_eq!(director.current_index(), Some(0));
        assert!(running(&director, a));
    }

    #[test]
    fn replace_twice_leaves_second_scene_current() {
        let (mut director, log, [a, b, ..]) = setup();

        assert!(director.replace("a"));
        assert!(director.replace("b"));

        assert_eq!(director.current_scene(), Some(b));
        assert_eq!(director.stack(), &[b]);
        assert_eq!(of(&log, "a"), vec!["a.pre_enter", "a.enter", "a.pre_exit", "a.exit"]);
        assert_eq!(of(&log, "b"), vec!["b.pre_enter", "b.enter"]);
        assert!(!director.state(a).map_or(true, |s| s.started));
    }

    //--- Properties -------------------------------------------------------

    #[test]
    fn each_push_grows_stack_by_one() {
        let (mut director, _log, ids) = setup();

        for (depth, id) in ids.iter().enumerate() {
            assert!(director.push(*id));
            assert_eq!(director.len(), depth + 1);
            assert_eq!(director.current_index(), Some(depth));
        }
    }

    #[test]
    fn only_current_scene_is_unpaused_once_settled() {
        let (mut director, _log, ids) = setup();
        let input = StateTracker::new();

        for id in ids {
            let x = Manual::default();
            director.push_with(id, x.clone());
            x.finish();
            director.update(ms(16), &input);
        }

        let (top, below) = ids.split_last().expect("four scenes");
        assert!(running(&director, *top));
        for id in below {
            assert!(director.state(*id).map_or(false, |s| s.paused));
        }
    }

    #[test]
    fn lifecycle_is_bracketed_through_pause_and_exit() {
        let (mut director, log, _) = setup();

        director.push("a");
        director.push("b");
        director.push("c");
        director.pop();
        director.replace("d");

        assert_eq!(
            of(&log, "b"),
            vec![
                "b.pre_enter",
                "b.enter",
                "b.pre_pause",
                "b.pause",
                "b.pre_resume",
                "b.resume",
                "b.pre_exit",
                "b.exit",
            ]
        );
    }

    #[test]
    fn replace_with_current_is_noop() {
        let (mut director, log, _) = setup();
        director.push("a");
        log.borrow_mut().clear();

        assert!(!director.replace("a"));
        assert!(!director.push("a"));
        assert!(lifecycle(&log).is_empty());
    }

    #[test]
    fn pop_needs_a_predecessor() {
        let (mut director, log, [a, ..]) = setup();

        assert!(!director.pop());
        assert!(!director.pop_with(fade(ms(100))));

        director.push("a");
        log.borrow_mut().clear();
        assert!(!director.pop());

        assert!(lifecycle(&log).is_empty());
        assert_eq!(director.stack(), &[a]);
        assert!(running(&director, a));
    }

    #[test]
    fn new_operation_flushes_in_flight_transition() {
        let (mut director, log, [a, b, c, _]) = setup();
        director.push("a");
        log.borrow_mut().clear();

        let x = Manual::default();
        director.push_with("b", x.clone());
        assert!(director.push("c"));

        assert_eq!(x.completes.get(), 1);
        assert_eq!(
            lifecycle(&log),
            vec![
                "a.pre_pause",
                "b.pre_enter",
                "a.pause",
                "b.enter",
                "b.pre_pause",
                "c.pre_enter",
                "b.pause",
                "c.enter",
            ]
        );
        assert_eq!(director.stack(), &[a, b, c]);
    }

    //--- Transition Safeguards --------------------------------------------

    #[test]
    fn silent_complete_is_settled_anyway() {
        let (mut director, _log, [a, b, ..]) = setup();
        director.push("a");

        let x = Manual::silent();
        director.push_with("b", x.clone());
        assert!(director.pop_all_but_one());

        assert_eq!(x.completes.get(), 1);
        assert!(!director.in_transition());
        assert_eq!(director.stack(), &[b]);
        assert!(!director.contains(a) || director.state(a) == Some(SceneState::DORMANT));
    }

    #[test]
    fn stalled_transition_is_forced_after_grace() {
        let (mut director, log, [_, b, ..]) = setup();
        let input = StateTracker::new();
        director.push("a");

        let x = Manual::lasting(ms(100));
        director.push_with("b", x.clone());

        director.update(ms(500), &input);
        assert!(director.in_transition());

        director.update(ms(700), &input);
        assert!(!director.in_transition());
        assert_eq!(x.completes.get(), 1);
        assert!(running(&director, b));
        assert_eq!(of(&log, "b"), vec!["b.pre_enter", "b.enter"]);
    }

    #[test]
    fn unbounded_grace_never_forces_completion() {
        let log = Log::default();
        let mut director = Director::with_config(DirectorConfig {
            grace: Duration::MAX,
            ..DirectorConfig::default()
        });
        director.add("a", Recorder { name: "a", log: Rc::clone(&log) });
        let b = director.add("b", Recorder { name: "b", log: Rc::clone(&log) });
        let input = StateTracker::new();
        director.push("a");

        let x = Manual::lasting(ms(100));
        director.push_with("b", x.clone());

        director.update(ms(16), &input);
        director.update(Duration::MAX, &input);
        director.update(ms(16), &input);
        assert!(director.in_transition());
        assert_eq!(x.completes.get(), 0);

        x.finish();
        director.update(ms(16), &input);
        assert!(!director.in_transition());
        assert!(running(&director, b));
    }

    #[test]
    fn indefinite_transition_keeps_running() {
        let (mut director, _log, [_, b, ..]) = setup();
        let input = StateTracker::new();
        director.push("a");

        let x = Manual::lasting(Duration::MAX);
        director.push_with("b", x.clone());

        director.update(ms(16), &input);
        director.update(Duration::from_secs(3600), &input);
        assert!(director.in_transition());

        x.finish();
        director.update(ms(16), &input);
        assert!(running(&director, b));
    }

    #[test]
    fn zero_length_transition_settles_during_call() {
        let (mut director, _log, [a, ..]) = setup();

        assert!(director.push_with("a", fade(Duration::ZERO)));

        assert!(!director.in_transition());
        assert!(running(&director, a));
    }

    #[test]
    fn fade_animates_incoming_view() {
        let (mut director, _log, [a, b, ..]) = setup();
        let input = StateTracker::new();
        director.push("a");

        director.push_with("b", fade(ms(100)));
        assert_eq!(director.view(b).map(|v| v.alpha), Some(0.0));

        director.update(ms(50), &input);
        let alpha = director.view(b).map_or(0.0, |v| v.alpha);
        assert!((alpha - 0.5).abs() < 1e-3);

        director.update(ms(60), &input);
        assert!(!director.in_transition());
        assert_eq!(director.view(b).map(|v| v.alpha), Some(1.0));
        assert_eq!(director.display().children(), &[a, b]);
    }

    //--- Reinsertion & Rejection ------------------------------------------

    #[test]
    fn replace_with_stacked_scene_resumes_it() {
        let (mut director, log, [a, ..]) = setup();
        director.push("a");
        director.push("b");
        log.borrow_mut().clear();

        assert!(director.replace("a"));

        assert_eq!(
            lifecycle(&log),
            vec!["b.pre_exit", "a.pre_resume", "b.exit", "a.resume"]
        );
        assert_eq!(director.stack(), &[a]);
        assert_eq!(director.current_index(), Some(0));
        assert_eq!(director.display().children(), &[a]);
        assert!(running(&director, a));
    }

    #[test]
    fn push_rejects_scene_already_stacked() {
        let (mut director, log, [a, b, ..]) = setup();
        director.push("a");
        director.push("b");
        log.borrow_mut().clear();

        assert!(!director.push("a"));
        assert!(lifecycle(&log).is_empty());
        assert_eq!(director.stack(), &[a, b]);
    }

    #[test]
    fn unknown_scenes_are_rejected() {
        let (mut director, _log, _) = setup();

        assert!(!director.push("missing"));
        assert!(!director.replace("missing"));
        assert!(!director.push(SceneId(99)));
        assert!(director.is_empty());
    }

    //--- Bulk Pops --------------------------------------------------------

    #[test]
    fn pop_all_exits_top_down() {
        let (mut director, log, _) = setup();
        director.push("a");
        director.push("b");
        director.push("c");
        log.borrow_mut().clear();

        assert!(director.pop_all());

        assert_eq!(
            lifecycle(&log),
            vec!["c.pre_exit", "c.exit", "b.pre_exit", "b.exit", "a.pre_exit", "a.exit"]
        );
        assert!(director.is_empty());
        assert_eq!(director.current_index(), None);
        assert!(director.display().is_empty());
        assert!(!director.pop_all());
    }

    #[test]
    fn pop_all_but_one_keeps_topmost() {
        let (mut director, log, [_, _, c, _]) = setup();
        director.push("a");
        director.push("b");
        director.push("c");
        log.borrow_mut().clear();

        assert!(director.pop_all_but_one());

        assert_eq!(
            lifecycle(&log),
            vec!["b.pre_exit", "b.exit", "a.pre_exit", "a.exit"]
        );
        assert_eq!(director.stack(), &[c]);
        assert_eq!(director.current_index(), Some(0));
        assert!(running(&director, c));
        assert!(!director.pop_all_but_one());
    }

    //--- Display Order ----------------------------------------------------

    #[test]
    fn display_tracks_stack_order() {
        let (mut director, _log, [a, b, c, _]) = setup();

        director.push("a");
        director.push("b");
        assert_eq!(director.display().children(), &[a, b]);

        director.replace("c");
        assert_eq!(director.display().children(), &[a, c]);

        assert!(director.make_top(a, c));
        assert_eq!(director.display().children(), &[c, a]);
        assert!(!director.make_top(a, c));
        assert_eq!(director.display().children(), &[c, a]);

        director.pop();
        assert_eq!(director.display().children(), &[a]);
    }

    //--- Update & Requests ------------------------------------------------

    #[test]
    fn update_only_reaches_running_scenes() {
        let (mut director, log, _) = setup();
        let input = StateTracker::new();
        director.push("a");
        director.push("b");

        director.update(ms(16), &input);

        let updates: Vec<String> = log
            .borrow()
            .iter()
            .filter(|entry| entry.ends_with(".update"))
            .cloned()
            .collect();
        assert_eq!(updates, vec!["b.update"]);
    }

    #[test]
    fn scene_requests_apply_after_update() {
        struct Opener {
            target: &'static str,
            ticks: u32,
        }

        impl Scene for Opener {
            fn update(&mut self, frame: &mut Frame<'_>) {
                self.ticks += 1;
                frame.view.alpha = 0.5;
                if self.ticks == 1 {
                    frame.requests.push(self.target);
                }
            }
        }

        let (mut director, log, [a, ..]) = setup();
        let input = StateTracker::new();
        let opener = director.add("opener", Opener { target: "a", ticks: 0 });
        director.push(opener);

        director.update(ms(16), &input);

        assert_eq!(director.stack(), &[opener, a]);
        assert_eq!(lifecycle(&log), vec!["a.pre_enter", "a.enter"]);
        assert_eq!(director.view(opener).map(|v| v.alpha), Some(0.5));
        assert!(director.state(opener).map_or(false, |s| s.paused));
    }

    //--- Registry ---------------------------------------------------------

    #[test]
    fn add_initializes_and_registers() {
        let (director, log, [a, ..]) = setup();

        assert_eq!(log.borrow().first().map(String::as_str), Some("a.initialize"));
        assert_eq!(director.get("a"), Some(a));
        assert_eq!(director.get(a), Some(a));
        assert_eq!(director.name(a), Some("a"));
        assert_eq!(director.get("nope"), None);
    }

    #[test]
    fn re_adding_a_name_rebinds_it() {
        let (mut director, log, [a, ..]) = setup();

        let again = director.add("a", Recorder { name: "a2", log: Rc::clone(&log) });

        assert_ne!(again, a);
        assert_eq!(director.get("a"), Some(again));
        assert!(!director.contains(a));
    }

    #[test]
    fn remove_keeps_stacked_scene_until_exit() {
        let (mut director, _log, [a, ..]) = setup();
        director.push("a");
        director.push("b");

        assert!(director.remove("a"));
        assert!(!director.remove("a"));
        assert_eq!(director.get("a"), None);
        assert!(director.contains(a));

        director.pop_all();
        assert!(!director.contains(a));
    }

    #[test]
    fn anonymous_scene_is_dropped_on_exit() {
        let (mut director, log, _) = setup();
        director.push("a");
        let temp = director.spawn(Recorder { name: "temp", log: Rc::clone(&log) });

        assert!(director.push(temp));
        assert!(director.pop());

        assert!(!director.contains(temp));
        assert_eq!(director.get(temp), None);
        assert_eq!(of(&log, "temp"), vec!["temp.pre_enter", "temp.enter", "temp.pre_exit", "temp.exit"]);
    }
}
