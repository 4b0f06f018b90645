//! Game state, engine, and observers.
//!
//! - `GameState`: the board and counters renderers read
//! - `MemoryGame`: input handling, resolution, timer and reset
//! - `Observer`: notified with a `GameEvent` after each mutation

mod engine;
mod event;
mod state;

pub use engine::{IgnoreReason, MemoryGame, SelectOutcome};
pub use event::{GameEvent, Observer, SubscriptionId};
pub use state::{GameSnapshot, GameState};
