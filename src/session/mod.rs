//! Game session: the host-facing entry point.
//!
//! A `GameSession` replaces a process-wide game manager. It is built
//! explicitly and passed to whatever needs it; there is no global state.

mod game;

pub use game::GameSession;
