//! Elapsed-time timer owned by a game.
//!
//! ## States
//!
//! - `Stopped`: no tick task pending
//! - `Running`: at most one tick task pending; its handle is stored here
//!
//! Each tick reschedules the next one, so a running timer always holds the
//! handle of the one task that may advance it. Ticks carrying any other
//! handle are stale and ignored.
//!
//! When the clock jumps past several seconds at once, the firing tick counts
//! every second up to the target (or up to the next other pending task) in
//! one step and schedules the next tick after that point.

use serde::{Deserialize, Serialize};

use super::scheduler::{ScheduledTask, Scheduler, TaskId, TaskKind};
use super::Epoch;

/// Clock time between two ticks. One tick is one elapsed second.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Timer lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    Stopped,
    Running { handle: TaskId },
}

/// Recurring one-tick-per-second timer.
#[derive(Clone, Debug)]
pub struct GameTimer {
    state: TimerState,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTimer {
    /// Create a stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Start ticking. No-op if already running.
    ///
    /// Returns true if the timer was started.
    pub fn start(&mut self, scheduler: &mut Scheduler, epoch: Epoch) -> bool {
        if self.is_running() {
            return false;
        }
        let handle = scheduler.schedule(TICK_INTERVAL_MS, epoch, TaskKind::Tick);
        self.state = TimerState::Running { handle };
        true
    }

    /// Stop ticking and cancel the pending tick.
    ///
    /// Returns true if the timer was running.
    pub fn stop(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.state {
            TimerState::Running { handle } => {
                scheduler.cancel(handle);
                self.state = TimerState::Stopped;
                true
            }
            TimerState::Stopped => false,
        }
    }

    /// Accept a fired tick task while the clock advances to `until_ms`.
    ///
    /// Returns the number of elapsed seconds the tick accounts for: the firing
    /// tick itself plus every later tick due at or before `until_ms` and
    /// strictly before any other pending task. The next tick is scheduled one
    /// interval after the last second counted. Returns 0 for stale ticks.
    ///
    /// If the next tick would fall past the end of the clock, nothing is
    /// scheduled and the timer stays running with no pending tick.
    pub fn on_tick(&mut self, scheduler: &mut Scheduler, task: &ScheduledTask, until_ms: u64) -> u64 {
        match self.state {
            TimerState::Running { handle } if handle == task.id => {}
            _ => return 0,
        }

        let limit = match scheduler.next_due_ms() {
            Some(other) => until_ms.min(other.saturating_sub(1)),
            None => until_ms,
        };
        let count = if limit > task.due_ms {
            (limit - task.due_ms) / TICK_INTERVAL_MS + 1
        } else {
            1
        };
        let last_ms = task.due_ms + (count - 1) * TICK_INTERVAL_MS;

        scheduler.set_now(last_ms);
        if last_ms.checked_add(TICK_INTERVAL_MS).is_some() {
            let next = scheduler.schedule(TICK_INTERVAL_MS, task.epoch, TaskKind::Tick);
            self.state = TimerState::Running { handle: next };
        } else {
            log::debug!("clock exhausted at {}; no further ticks", last_ms);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_stopped() {
        let timer = GameTimer::new();

        assert!(!timer.is_running());
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();

        assert!(timer.start(&mut scheduler, Epoch::default()));
        assert!(!timer.start(&mut scheduler, Epoch::default()));

        assert!(timer.is_running());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_tick_reschedules() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();
        timer.start(&mut scheduler, Epoch::default());

        let task = scheduler.pop_due(1000).unwrap();
        assert_eq!(timer.on_tick(&mut scheduler, &task, 1000), 1);

        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.next_due_ms(), Some(2000));
    }

    #[test]
    fn test_tick_counts_every_second_up_to_target() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();
        timer.start(&mut scheduler, Epoch::default());

        let task = scheduler.pop_due(5500).unwrap();
        assert_eq!(timer.on_tick(&mut scheduler, &task, 5500), 5);

        assert_eq!(scheduler.now_ms(), 5000);
        assert_eq!(scheduler.next_due_ms(), Some(6000));
    }

    #[test]
    fn test_tick_stops_counting_before_other_tasks() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();
        timer.start(&mut scheduler, Epoch::default());
        scheduler.schedule(3000, Epoch::default(), TaskKind::Resolve { first: 0, second: 1 });

        let task = scheduler.pop_due(10_000).unwrap();
        assert_eq!(timer.on_tick(&mut scheduler, &task, 10_000), 2);

        // Next tick lands on the resolution's millisecond and runs after it.
        let next = scheduler.pop_due(10_000).unwrap();
        assert!(matches!(next.kind, TaskKind::Resolve { .. }));
        assert_eq!(next.due_ms, 3000);
    }

    #[test]
    fn test_tick_at_end_of_clock_schedules_nothing() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();
        timer.start(&mut scheduler, Epoch::default());

        let task = scheduler.pop_due(u64::MAX).unwrap();
        let count = timer.on_tick(&mut scheduler, &task, u64::MAX);

        assert_eq!(count, u64::MAX / TICK_INTERVAL_MS);
        assert!(timer.is_running());
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();
        timer.start(&mut scheduler, Epoch::default());

        assert!(timer.stop(&mut scheduler));
        assert!(!timer.stop(&mut scheduler));

        assert_eq!(scheduler.pending_count(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stale_tick_is_rejected() {
        let mut scheduler = Scheduler::new();
        let mut timer = GameTimer::new();

        timer.start(&mut scheduler, Epoch::default());
        let stale = scheduler.pop_due(1000).unwrap();
        timer.stop(&mut scheduler);
        timer.start(&mut scheduler, Epoch::default());

        assert_eq!(timer.on_tick(&mut scheduler, &stale, 1000), 0);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
