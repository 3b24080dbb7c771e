//! Events emitted to the presentation layer.
//!
//! ## Design Philosophy
//!
//! The engine owns all game state; presentation only watches. Rendering,
//! animation and audio subscribe by implementing `EventSink` and issue
//! input back through [`crate::session::GameSession`].

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, NullSink};
