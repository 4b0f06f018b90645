//! Game state: the board plus counters.
//!
//! ## GameState
//!
//! Everything a renderer needs:
//! - Cards in grid order (position = selection index)
//! - Indices revealed this attempt (at most two)
//! - Input lock while a pair waits for resolution
//! - Attempt and elapsed-second counters
//!
//! Fields are read-only outside the crate. `MemoryGame` is the only writer.
//!
//! ## GameSnapshot
//!
//! A detached copy of the state plus clock and generation, cheap to take
//! because cards live in a persistent `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck};
use crate::core::GameRngState;
use crate::timing::Epoch;

/// Observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cards: Vector<Card>,
    revealed: SmallVec<[usize; 2]>,
    input_locked: bool,
    attempts: u32,
    elapsed_seconds: u64,
    timer_active: bool,
}

impl GameState {
    /// Fresh state over a dealt deck: counters zeroed, input open, timer off.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            cards: deck.into_cards(),
            revealed: SmallVec::new(),
            input_locked: false,
            attempts: 0,
            elapsed_seconds: 0,
            timer_active: false,
        }
    }

    // === Board ===

    /// Cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card at a grid position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched).count() / 2
    }

    /// Every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.is_matched)
    }

    // === Attempt ===

    /// Indices revealed in the current attempt.
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Whether selections are currently ignored.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Completed attempts (pairs revealed).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    // === Timer ===

    /// Whole seconds elapsed since the first reveal.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Whether the timer is running.
    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        self.timer_active
    }

    // === Mutation (engine only) ===

    /// Flip a card and append it to the revealed list.
    pub(crate) fn reveal(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.reveal();
            self.revealed.push(index);
        }
    }

    /// Lock input and count the attempt.
    pub(crate) fn begin_resolution(&mut self) {
        self.input_locked = true;
        self.attempts += 1;
    }

    /// Compare two revealed cards, mark or hide them, and reopen input.
    ///
    /// Returns `Some(true)` for a match, `Some(false)` for a mismatch and
    /// `None` when the indices coincide or are off the board, in which case
    /// no card changes.
    pub(crate) fn resolve_pair(&mut self, first: usize, second: usize) -> Option<bool> {
        let outcome = if first == second {
            None
        } else {
            match (self.cards.get(first), self.cards.get(second)) {
                (Some(a), Some(b)) => Some(a.matches(b)),
                _ => None,
            }
        };

        match outcome {
            Some(true) => {
                for index in [first, second] {
                    if let Some(card) = self.cards.get_mut(index) {
                        card.mark_matched();
                    }
                }
            }
            Some(false) => {
                for index in [first, second] {
                    if let Some(card) = self.cards.get_mut(index) {
                        card.hide();
                    }
                }
            }
            None => {}
        }

        self.revealed.clear();
        self.input_locked = false;
        outcome
    }

    /// Add `seconds` elapsed seconds.
    pub(crate) fn add_elapsed(&mut self, seconds: u64) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
    }

    pub(crate) fn set_timer_active(&mut self, active: bool) {
        self.timer_active = active;
    }
}

/// Detached view of a game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board and counters.
    pub state: GameState,
    /// Generation the snapshot was taken in.
    pub epoch: Epoch,
    /// Game clock.
    pub now_ms: u64,
    /// Shuffle RNG position.
    pub rng: GameRngState,
}
