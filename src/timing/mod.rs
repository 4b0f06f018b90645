//! Time: the deferred-task scheduler, the game timer, and epochs.
//!
//! Nothing here reads the wall clock. A game owns one `Scheduler` and one
//! `GameTimer`; the host advances time explicitly.
//!
//! ## Epochs
//!
//! Every reset starts a new `Epoch`. Tasks remember the epoch they were
//! scheduled in, and a task whose epoch is not current is ignored when it
//! fires.

mod scheduler;
mod timer;

pub use scheduler::{ScheduledTask, Scheduler, TaskId, TaskKind};
pub use timer::{GameTimer, TimerState, TICK_INTERVAL_MS};

use serde::{Deserialize, Serialize};

/// Game generation counter, incremented on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Epoch(pub u64);

impl Epoch {
    /// The following generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}
