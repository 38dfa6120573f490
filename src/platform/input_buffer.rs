//=========================================================================
// Input Buffer
//=========================================================================
//
// Host-side batching of input between two flushes.
//
// Architecture:
//   push(event) ─┬─ Ordered    → discrete: Vec (consecutive duplicates dropped)
//                ├─ Latest     → continuous: HashSet (newest per identity)
//                └─ Accumulate → wheel: summed delta
//
// drain() emits discrete events first, then the summed wheel delta, then
// the latest continuous samples.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::{Coalescing, InputEvent};

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
    wheel: Option<(f32, f32)>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
            wheel: None,
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Buffers an event according to its coalescing class.
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event.coalescing() {
            Coalescing::Ordered => {
                if self.discrete.last() != Some(&event) {
                    self.discrete.push(event);
                }
            }
            Coalescing::Latest => {
                self.continuous.replace(event);
            }
            Coalescing::Accumulate => {
                if let InputEvent::MouseWheel { dx, dy } = event {
                    let (sx, sy) = self.wheel.unwrap_or((0.0, 0.0));
                    self.wheel = Some((sx + dx, sy + dy));
                }
            }
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes every buffered event, or `None` if nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }

        let mut events = Vec::with_capacity(self.len());
        events.append(&mut self.discrete);
        if let Some((dx, dy)) = self.wheel.take() {
            events.push(InputEvent::MouseWheel { dx, dy });
        }
        events.extend(self.continuous.drain());
        Some(events)
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len() + usize::from(self.wheel.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyB));
        buffer.push(key_down(KeyCode::KeyA));

        assert_eq!(buffer.discrete.len(), 3);
    }

    #[test]
    fn continuous_keeps_latest_per_identity() {
        let mut buffer = InputBuffer::new();
        buffer.push(mouse_move(10.0, 10.0));
        buffer.push(mouse_move(20.0, 30.0));
        buffer.push(InputEvent::TouchMove { id: 1, x: 0.0, y: 0.0 });
        buffer.push(InputEvent::TouchMove { id: 2, x: 0.0, y: 0.0 });
        buffer.push(InputEvent::TouchMove { id: 1, x: 5.0, y: 6.0 });

        assert_eq!(buffer.continuous.len(), 3);

        let events = buffer.drain().unwrap_or_default();
        assert!(events.iter().any(|e| matches!(e, InputEvent::MouseMoved { x, y } if (*x, *y) == (20.0, 30.0))));
        assert!(events.iter().any(|e| matches!(e, InputEvent::TouchMove { id: 1, x, .. } if *x == 5.0)));
    }

    #[test]
    fn wheel_deltas_are_summed() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::MouseWheel { dx: 0.0, dy: 1.0 });
        buffer.push(InputEvent::MouseWheel { dx: 1.0, dy: 1.5 });

        let events = buffer.drain().unwrap_or_default();
        assert_eq!(events.len(), 1);
        match events[0] {
            InputEvent::MouseWheel { dx, dy } => assert_eq!((dx, dy), (1.0, 2.5)),
            ref other => panic!("Expected MouseWheel, found {:?}", other),
        }
    }

    #[test]
    fn drain_orders_discrete_first_and_empties() {
        let mut buffer = InputBuffer::new();
        buffer.push(mouse_move(5.0, 5.0));
        buffer.push(key_down(KeyCode::KeyA));

        let events = buffer.drain().unwrap_or_default();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], key_down(KeyCode::KeyA));
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn wheel_counts_as_one_pending_event() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::MouseWheel { dx: 0.0, dy: 1.0 });
        buffer.push(InputEvent::MouseWheel { dx: 0.0, dy: 1.0 });

        assert_eq!(buffer.len(), 1);
    }
}
