//! Game event types.
//!
//! Events are the engine's half of the presentation boundary: every
//! committed change the player should see is announced as a `GameEvent`,
//! in the order it happened. Slot indices are row-major grid indices.

use serde::{Deserialize, Serialize};

use crate::cards::FaceId;

/// Something the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh grid was dealt; build `rows * cols` face-down cards.
    GameStarted { rows: u32, cols: u32 },

    /// A saved grid was restored; build it from the session's slot views
    /// without animating already-matched cards.
    GameRestored { rows: u32, cols: u32 },

    /// A card was turned face-up by a selection.
    CardRevealed { slot: usize, face: FaceId },

    /// Two selected cards form a pair and stay revealed.
    MatchResolved { first: usize, second: usize },

    /// Two selected cards differ. `MismatchResolved` follows after the delay.
    MismatchDetected { first: usize, second: usize },

    /// The mismatched cards should be turned face-down again.
    MismatchResolved { first: usize, second: usize },

    ScoreChanged { score: i64, streak: u32 },

    /// Every pair has been found.
    GameWon,

    /// Opening reveal: show every card.
    AllCardsRevealed,

    /// Opening reveal over: hide every unmatched card.
    AllCardsHidden,
}

impl GameEvent {
    /// Slots this event is about, if any.
    #[must_use]
    pub fn slots(&self) -> Option<(usize, Option<usize>)> {
        match *self {
            GameEvent::CardRevealed { slot, .. } => Some((slot, None)),
            GameEvent::MatchResolved { first, second }
            | GameEvent::MismatchDetected { first, second }
            | GameEvent::MismatchResolved { first, second } => Some((first, Some(second))),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { rows, cols } => write!(f, "game started ({}x{})", rows, cols),
            GameEvent::GameRestored { rows, cols } => write!(f, "game restored ({}x{})", rows, cols),
            GameEvent::CardRevealed { slot, face } => write!(f, "slot {} revealed {}", slot, face),
            GameEvent::MatchResolved { first, second } => write!(f, "match {} + {}", first, second),
            GameEvent::MismatchDetected { first, second } => {
                write!(f, "mismatch {} + {}", first, second)
            }
            GameEvent::MismatchResolved { first, second } => {
                write!(f, "flip back {} + {}", first, second)
            }
            GameEvent::ScoreChanged { score, streak } => {
                write!(f, "score {} (streak {})", score, streak)
            }
            GameEvent::GameWon => write!(f, "game won"),
            GameEvent::AllCardsRevealed => write!(f, "all cards revealed"),
            GameEvent::AllCardsHidden => write!(f, "all cards hidden"),
        }
    }
}
