//! Game events and observers.
//!
//! Each mutation of a game emits a `GameEvent`, delivered to every
//! subscribed `Observer` together with the state after the change.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use memory_match::core::GameConfig;
//! use memory_match::game::{GameEvent, GameState, MemoryGame};
//!
//! let mut game = MemoryGame::new(GameConfig::with_symbols(["A", "B"]), 42).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! game.subscribe(move |_: &GameState, event: &GameEvent| sink.borrow_mut().push(event.clone()));
//!
//! game.select(0).unwrap();
//! assert_eq!(seen.borrow().last(), Some(&GameEvent::CardRevealed { index: 0 }));
//! ```

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::timing::Epoch;

/// Something that changed the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was flipped face-up.
    CardRevealed { index: usize },

    /// A second card was revealed; resolution is scheduled.
    PairRevealed { first: usize, second: usize },

    /// The revealed pair matched and stays face-up.
    PairMatched { first: usize, second: usize },

    /// The revealed pair differed and was turned back over.
    PairHidden { first: usize, second: usize },

    /// Resolution found no pair to compare and only reopened input.
    ResolutionSkipped { first: usize, second: usize },

    /// The timer started on the first reveal.
    TimerStarted,

    /// One second elapsed.
    Tick { elapsed_seconds: u64 },

    /// The timer stopped.
    TimerStopped { elapsed_seconds: u64 },

    /// Every pair has been found.
    Completed { attempts: u32, elapsed_seconds: u64 },

    /// A fresh deck was dealt.
    Reset { epoch: Epoch },
}

/// Receives game events after each mutation.
pub trait Observer {
    /// Called with the state as it is after `event`.
    fn on_event(&mut self, state: &GameState, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameState, &GameEvent),
{
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        self(state, event)
    }
}

/// Handle returned by `MemoryGame::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);
