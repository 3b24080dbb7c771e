//! Save/restore of games in progress.
//!
//! Saves are whole snapshots, never increments. The session writes one
//! after every committed transition (new game, match, mismatch) and on
//! shutdown, so a crash loses at most the pending flip-back.
//!
//! ## Layers
//!
//! - `SaveRecord`: the flat record and its JSON/binary forms
//! - `encode` / `decode`: live state ↔ record, with validation
//! - `SaveStore`: where the record is kept (`MemoryStore`, `JsonFileStore`)

mod record;
mod codec;
mod store;

pub use record::SaveRecord;
pub use codec::{decode, decode_json, encode, RestoredGame};
pub use store::{JsonFileStore, MemoryStore, SaveStore, DEFAULT_SAVE_FILE};
