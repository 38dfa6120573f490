//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the host window layer and the Stage.
//
// Components:
// - `interface`: messages and errors crossing the channel
// - `event_collector`: Stage-side bounded drain
//
// The host side (`InputFeed`) lives in the `platform` module.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::{PlatformError, PlatformEvent};
