//! Core building blocks: configuration, errors, RNG.
//!
//! Nothing here knows about turns or timers; the game module builds on
//! these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use rng::{GameRng, GameRngState};
