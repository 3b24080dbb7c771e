//! Card slots - runtime card state.
//!
//! A `CardSlot` is one position of the grid: the face it hides and
//! whether its pair has been found. Where the slot sits on screen is
//! derived from its index by [`crate::grid::GridDims`], and whether it is
//! currently face-up is turn state, not slot state.

use serde::{Deserialize, Serialize};

use super::face::FaceId;

/// One card in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    /// Pair identity.
    pub face: FaceId,

    /// Set once the pair is found; never cleared during a game.
    pub matched: bool,
}

impl CardSlot {
    /// Create an unmatched slot.
    #[must_use]
    pub const fn new(face: FaceId) -> Self {
        Self { face, matched: false }
    }

    /// Create a slot with an explicit matched flag (used on restore).
    #[must_use]
    pub const fn with_matched(face: FaceId, matched: bool) -> Self {
        Self { face, matched }
    }

    /// Whether this slot pairs with `other`.
    #[must_use]
    pub fn pairs_with(&self, other: &CardSlot) -> bool {
        self.face == other.face
    }
}
