//! Cards and symbols.
//!
//! A `Card` is one grid cell: a symbol plus face-up/matched flags. Its
//! `CardId` is the position it was dealt at before shuffling, so identity
//! survives reordering.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable card identifier (position in the unshuffled deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Symbol token printed on a card face.
///
/// Opaque to the engine: two cards match when their symbols are exactly
/// equal. Backed by `Arc<str>` so dealing a deck never copies the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol from text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// The symbol's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

/// One card on the board.
///
/// Invariant: `is_matched` implies `is_flipped`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity.
    pub id: CardId,

    /// Face symbol.
    pub value: Symbol,

    /// Face-up?
    pub is_flipped: bool,

    /// Part of a found pair?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, value: Symbol) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the card shows its symbol.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Whether a selection of this card would be accepted.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Turn face-up.
    pub fn reveal(&mut self) {
        self.is_flipped = true;
    }

    /// Turn face-down. Matched cards stay up.
    pub fn hide(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    /// Mark as part of a found pair (and face-up).
    pub fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }

    /// Whether two cards form a pair.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.value == other.value
    }
}
