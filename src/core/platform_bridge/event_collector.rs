//=========================================================================
// Event Collector
//=========================================================================
//
// Stage-side drain of the host input channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events → TickControl
//
// Draining is bounded per frame so a flooding host cannot starve a tick.
// Anything left over is picked up on the next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Whether the Stage should keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains host batches into one flat event list per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
    max_batches_per_frame: usize,
}

impl EventCollector {
    /// Default bound on batches drained in one tick.
    pub(crate) const MAX_BATCHES_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self::with_limit(receiver, Self::MAX_BATCHES_PER_FRAME)
    }

    pub(crate) fn with_limit(receiver: Receiver<PlatformEvent>, max_batches_per_frame: usize) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(64),
            max_batches_per_frame,
        }
    }

    /// Collects pending batches, replacing last tick's events.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < self.max_batches_per_frame {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::Closed) => {
                    info!("Host window closed");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    info!("Input feed dropped");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_batches_per_frame {
            warn!("Input backlog: drained {} batches this frame", drained);
        }

        TickControl::Continue
    }

    /// Events collected by the last `collect_frame`.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn space() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE }
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_flattens_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![space()])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::MouseWheel { dx: 0.0, dy: 1.0 }]))
            .unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.events(),
            &[space(), InputEvent::MouseWheel { dx: 0.0, dy: 1.0 }]
        );
    }

    #[test]
    fn collect_clears_previous_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![space()])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);

        collector.collect_frame();
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::with_limit(rx, 2);

        for _ in 0..3 {
            tx.send(PlatformEvent::Inputs(vec![space()])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.events().len(), 2);

        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);
    }

    #[test]
    fn collect_returns_exit_on_close() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Closed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
