//! Deck construction.
//!
//! A deck for N symbols holds 2N cards laid out as `symbols ++ symbols`,
//! ids equal to that layout position, then shuffled with Fisher–Yates.
//!
//! ```
//! use memory_match::cards::{Deck, Symbol};
//! use memory_match::core::GameRng;
//!
//! let symbols: Vec<Symbol> = ["A", "B", "C"].into_iter().map(Symbol::from).collect();
//! let mut rng = GameRng::new(42);
//! let deck = Deck::shuffled(&symbols, &mut rng);
//!
//! assert_eq!(deck.len(), 6);
//! assert!(deck.is_well_formed());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::{Card, CardId, Symbol};
use crate::core::GameRng;

/// An ordered deck of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal each symbol twice, in layout order, face-down.
    #[must_use]
    pub fn new(symbols: &[Symbol]) -> Self {
        let cards = symbols
            .iter()
            .chain(symbols.iter())
            .enumerate()
            .map(|(position, symbol)| Card::new(CardId::new(position as u32), symbol.clone()))
            .collect();

        Self { cards }
    }

    /// Deal and shuffle.
    #[must_use]
    pub fn shuffled(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut deck = Self::new(symbols);
        deck.shuffle(rng);
        deck
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many cards carry each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<&Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.value).or_insert(0) += 1;
        }
        counts
    }

    /// Every symbol appears exactly twice and every card is face-down.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.symbol_counts().values().all(|&count| count == 2)
            && self.cards.iter().all(Card::is_selectable)
    }

    /// Convert into the persistent vector the game state holds.
    #[must_use]
    pub fn into_cards(self) -> Vector<Card> {
        self.cards.into_iter().collect()
    }
}
