//! Card system: symbols, cards, and deck construction.
//!
//! ## Design
//!
//! - `Symbol`: opaque face token; matching is exact equality
//! - `Card`: one grid cell with face-up and matched flags
//! - `Deck`: pairs every symbol and shuffles the result

mod card;
mod deck;

pub use card::{Card, CardId, Symbol};
pub use deck::Deck;
