//! # memory-match
//!
//! A memory-matching card game engine.
//!
//! A deck of paired symbols is shuffled face-down. The player reveals two
//! cards per attempt; a matching pair stays face-up, a mismatch is turned
//! back over after a short delay. A timer starts on the first reveal and
//! stops once every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `MemoryGame` owns the board, the shuffle RNG,
//!    the scheduler and the timer. Observers are told about every change.
//!
//! 2. **Explicit Time**: No wall clock inside the engine. Hosts call
//!    `advance`, and deferred work runs in due order.
//!
//! 3. **Generations**: Every reset starts a new epoch. Work scheduled in an
//!    earlier epoch does nothing when it fires.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deterministic RNG
//! - `cards`: Symbols, cards, deck construction
//! - `timing`: Scheduler, game timer, epochs
//! - `game`: Game state, engine, events and observers
//! - `render`: Text render surface

pub mod core;
pub mod cards;
pub mod timing;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameError, GameRng, GameRngState};

pub use crate::cards::{Card, CardId, Deck, Symbol};

pub use crate::timing::{Epoch, GameTimer, Scheduler, TaskId, TaskKind, TimerState};

pub use crate::game::{
    GameEvent, GameSnapshot, GameState, IgnoreReason, MemoryGame, Observer, SelectOutcome,
    SubscriptionId,
};

pub use crate::render::{Board, CardFace};
