//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Host-side half of the input channel.
//
// Architecture:
// ```text
//  Host window thread:                  Tick loop:
//  ┌──────────────────────────┐        ┌──────────────────┐
//  │  winit WindowEvent       │        │  Stage::tick     │
//  │   ↓                      │        │   ↓              │
//  │  InputProcessor          │        │  EventCollector  │
//  │   └─ sticky modifiers    │        │   ↓              │
//  │   ↓                      │        │  StateTracker    │
//  │  InputBuffer             │        │   ↓              │
//  │   ├─ discrete (ordered)  │        │  Director        │
//  │   ├─ wheel (summed)      │        └──────────────────┘
//  │   └─ continuous (latest) │                 ↑
//  │   ↓                      │                 │
//  │  RedrawRequested (flush) │                 │
//  │   ↓                      │                 │
//  │  bounded channel ────────┼─────────────────┘
//  └──────────────────────────┘      PlatformEvent
// ```
//
// RedrawRequested is the frame boundary: everything buffered since the
// previous one is sent as a single batch. Empty batches are not sent.
//
// The feed never blocks the host. A full or disconnected channel drops the
// batch, logs a warning and reports a `PlatformError`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{info, trace, warn};
use winit::event::WindowEvent;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== InputFeed ===========================================================

/// Batches host input and ships it to a [`Stage`](crate::Stage).
///
/// Obtained from [`StageBuilder::build`](crate::StageBuilder::build). The
/// feed is `Send`, so it can live on the window thread while the Stage ticks
/// elsewhere.
///
/// # Examples
///
/// ```
/// use stagecraft::prelude::*;
///
/// let (mut stage, mut feed) = StageBuilder::new().build();
///
/// feed.push(InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE });
/// feed.flush().expect("stage is alive");
///
/// stage.tick(std::time::Duration::from_millis(16));
/// assert!(stage.input().is_key_pressed(KeyCode::Space));
/// ```
pub struct InputFeed {
    sender: Sender<PlatformEvent>,
    buffer: InputBuffer,
    processor: InputProcessor,
}

impl InputFeed {
    pub(crate) fn new(sender: Sender<PlatformEvent>) -> Self {
        Self {
            sender,
            buffer: InputBuffer::new(),
            processor: InputProcessor::new(),
        }
    }

    //--- Host Integration -------------------------------------------------

    /// Feeds one winit window event.
    ///
    /// Input events are translated and buffered, `RedrawRequested` flushes
    /// the buffer and `CloseRequested` sends [`PlatformEvent::Closed`].
    /// Everything else is ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => {
                // Failure is already logged by flush.
                let _ = self.flush();
            }
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close();
            }
            _ => {
                if let Some(input) = self.processor.process_window_event(event) {
                    self.buffer.push(input);
                }
            }
        }
    }

    /// Buffers an already-translated event.
    ///
    /// Hosts without winit, or tests, use this to inject input directly.
    pub fn push(&mut self, event: InputEvent) {
        self.buffer.push(event);
    }

    /// Number of events waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    //--- Delivery ---------------------------------------------------------

    /// Sends everything buffered as one batch.
    ///
    /// Does nothing when the buffer is empty.
    ///
    /// # Errors
    ///
    /// [`PlatformError::Backlog`] if the channel is full and
    /// [`PlatformError::Disconnected`] if the Stage was dropped. In both
    /// cases the batch is discarded.
    pub fn flush(&mut self) -> Result<(), PlatformError> {
        let Some(events) = self.buffer.drain() else {
            return Ok(());
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} input events", count);

        match self.sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                let error = PlatformError::Backlog { dropped: count };
                warn!(target: "platform::input", "{}", error);
                Err(error)
            }
            Err(TrySendError::Disconnected(_)) => {
                let error = PlatformError::Disconnected { dropped: count };
                warn!(target: "platform::input", "{}", error);
                Err(error)
            }
        }
    }

    /// Flushes pending input, then tells the Stage to exit.
    pub fn close(&mut self) {
        let _ = self.flush();
        if self.sender.try_send(PlatformEvent::Closed).is_err() {
            warn!(target: "platform", "Could not deliver close notification");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
