//=========================================================================
// Stage
//
// Frame-level facade tying the input channel, the input tracker and the
// Director together.
//
// Architecture:
// ```text
//     StageBuilder ──build()──> (Stage, InputFeed)
//         │                       │        │
//         ├─ with_size()          │        └─ host window: translate,
//         ├─ with_transition_grace()          buffer, flush per frame
//         ├─ with_channel_capacity()
//         └─ with_dead_zone()     └─ tick(dt):
//                                      EventCollector::collect_frame
//                                      StateTracker clear → process → finalize
//                                      Director::update
// ```
//
// The host owns the frame loop. The Stage never sleeps or spawns threads.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::bounded;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::input::{GamepadState, StateTracker};
use crate::core::platform_bridge::{EventCollector, TickControl};
use crate::core::scene::{Director, DirectorConfig};
use crate::platform::InputFeed;

//=== StageBuilder ========================================================

/// Builder for a [`Stage`] and its [`InputFeed`].
///
/// # Default Values
///
/// - **Size**: 800×600
/// - **Transition grace**: 1 s
/// - **Channel capacity**: 128 batches
/// - **Dead zone**: 0.15
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stagecraft::StageBuilder;
///
/// let (stage, _feed) = StageBuilder::new()
///     .with_size(1280.0, 720.0)
///     .with_transition_grace(Duration::from_millis(500))
///     .with_channel_capacity(256)
///     .build();
///
/// assert_eq!(stage.director().config().bounds, (1280.0, 720.0));
/// ```
#[derive(Debug, Clone)]
pub struct StageBuilder {
    size: (f32, f32),
    grace: Duration,
    channel_capacity: usize,
    dead_zone: f32,
}

impl StageBuilder {
    pub fn new() -> Self {
        let config = DirectorConfig::default();
        Self {
            size: config.bounds,
            grace: config.grace,
            channel_capacity: 128,
            dead_zone: GamepadState::DEFAULT_DEAD_ZONE,
        }
    }

    /// Sets the stage size used by sliding and scrolling transitions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Stage size must be positive, got {}x{}",
            width,
            height
        );
        self.size = (width, height);
        self
    }

    /// Sets how long past its duration a transition may run before it is
    /// force-completed.
    pub fn with_transition_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Sets how many input batches the channel holds before the host starts
    /// dropping them.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the gamepad stick and trigger dead zone.
    ///
    /// # Panics
    ///
    /// Panics if `dead_zone` is outside `[0, 1)`.
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        assert!(
            (0.0..1.0).contains(&dead_zone),
            "Dead zone must be in [0, 1), got {}",
            dead_zone
        );
        self.dead_zone = dead_zone;
        self
    }

    /// Builds the Stage and the host-side feed connected to it.
    pub fn build(self) -> (Stage, InputFeed) {
        info!(
            "Building stage ({}x{}, grace: {:?}, channel: {}, dead zone: {})",
            self.size.0, self.size.1, self.grace, self.channel_capacity, self.dead_zone
        );

        let (tx, rx) = bounded(self.channel_capacity);
        let config = DirectorConfig {
            bounds: self.size,
            grace: self.grace,
        };

        let stage = Stage {
            director: Director::with_config(config),
            input: StateTracker::with_dead_zone(self.dead_zone),
            collector: EventCollector::new(rx),
        };

        (stage, InputFeed::new(tx))
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Stage ===============================================================

/// Owns the Director and the input state; ticked once per frame.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stagecraft::prelude::*;
///
/// struct Title;
/// impl Scene for Title {
///     fn update(&mut self, frame: &mut Frame<'_>) {
///         if frame.input.is_key_pressed(KeyCode::Enter) {
///             frame.requests.pop();
///         }
///     }
/// }
///
/// let (mut stage, mut feed) = StageBuilder::new().build();
/// stage.director_mut().add("title", Title);
/// stage.director_mut().push("title");
///
/// while stage.tick(Duration::from_millis(16)) == TickControl::Continue {
///     // Host window events would be fed here.
///     feed.close();
/// }
/// ```
pub struct Stage {
    director: Director,
    input: StateTracker,
    collector: EventCollector,
}

impl Stage {
    //--- Frame ------------------------------------------------------------

    /// Runs one frame: drains host input, updates the input state, then
    /// updates the Director.
    ///
    /// Returns [`TickControl::Exit`] once the host closed its window or
    /// dropped the feed; the Director is not updated on that tick.
    pub fn tick(&mut self, dt: Duration) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            debug!("Stage exiting");
            return TickControl::Exit;
        }

        self.input.clear();
        self.input.process_events(self.collector.events());
        self.input.finalize_frame();

        self.director.update(dt, &self.input);
        TickControl::Continue
    }

    //--- Accessors --------------------------------------------------------

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn director_mut(&mut self) -> &mut Director {
        &mut self.director
    }

    /// Input state as of the last tick.
    pub fn input(&self) -> &StateTracker {
        &self.input
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
