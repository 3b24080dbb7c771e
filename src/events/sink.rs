//! Event sinks: where the engine sends its events.
//!
//! The presentation layer implements [`EventSink`] and is handed to the
//! session at construction. The engine never reads anything back from it.

use super::event::GameEvent;

/// Receiver of game events.
///
/// Called synchronously, in order, from inside the engine's transitions.
/// Implementations must not assume any particular timing beyond that
/// ordering.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Sink that drops every event (headless play, benchmarks).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Collects events in order; handy for tests and replay logs.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
