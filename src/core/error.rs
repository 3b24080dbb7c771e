//! Error types.
//!
//! Selection problems (stale, out-of-range or locked clicks) are not
//! errors; see [`crate::turns::RejectReason`].

use thiserror::Error;

/// A grid cannot be built with the requested shape or face set.
///
/// Fatal to starting a game; no partial grid is ever created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid has no slots")]
    EmptyGrid,

    #[error("grid has {total_slots} slots; pairs need an even count")]
    OddGridSize { total_slots: usize },

    #[error("{pairs} pairs requested but only {face_count} distinct faces are available")]
    InsufficientFaces { pairs: usize, face_count: usize },

    #[error("expected {expected} faces for the grid, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },
}

/// A save record that cannot be turned back into a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CorruptSaveData {
    #[error("saved grid is {rows}x{cols}, which cannot hold pairs")]
    DimensionsInvalid { rows: u32, cols: u32 },

    #[error("saved `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("slot {slot} holds face {face}, but only {face_count} faces are loaded")]
    FaceOutOfRange { slot: usize, face: u32, face_count: usize },

    #[error("face {face} appears {count} times; every face must appear exactly twice")]
    UnpairedFace { face: u32, count: usize },

    #[error("the two slots of face {face} disagree on whether it is matched")]
    PairFlagsDisagree { face: u32 },
}

/// Failure converting a save record to or from its text/binary forms.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("save JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save bytes are malformed: {0}")]
    Binary(#[from] bincode::Error),

    #[error(transparent)]
    Corrupt(#[from] CorruptSaveData),
}

/// Failure reading or writing a save store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
