//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors shared by the host-side `InputFeed` and the
// Stage-side `EventCollector`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Message sent from the host to the Stage.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// One frame's worth of batched input.
    Inputs(Vec<InputEvent>),

    /// The host window is closing.
    Closed,
}

//=== PlatformError =======================================================

/// Reasons a flush could not deliver its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// The Stage was dropped; the batch was discarded.
    Disconnected { dropped: usize },

    /// The channel is full because the Stage stopped ticking.
    Backlog { dropped: usize },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected { dropped } => {
                write!(f, "Stage disconnected, dropped {} input events", dropped)
            }
            Self::Backlog { dropped } => {
                write!(f, "Input channel full, dropped {} input events", dropped)
            }
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================
