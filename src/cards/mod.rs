//! Card data and deck generation.
//!
//! ## Key Types
//!
//! - `FaceId`: Pair identity, an index into the host's face set
//! - `CardSlot`: One grid position (face + matched flag)
//! - `generate_deck`: Paired, shuffled faces for a new grid
//!
//! Cards are plain data. Anything visual about a card belongs to the
//! presentation layer, which follows along through [`crate::events`].

pub mod face;
pub mod slot;
pub mod deck;

pub use face::FaceId;
pub use slot::CardSlot;
pub use deck::generate_deck;
