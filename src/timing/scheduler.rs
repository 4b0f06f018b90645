//! Deferred task scheduling on an explicit millisecond clock.
//!
//! The scheduler never reads wall time. Hosts move the clock forward and
//! drain due tasks in `(due, scheduling order)` order, which keeps every
//! game deterministic under test.
//!
//! ```
//! use memory_match::timing::{Epoch, Scheduler, TaskKind};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(1000, Epoch::default(), TaskKind::Tick);
//!
//! assert!(scheduler.pop_due(999).is_none());
//! let task = scheduler.pop_due(1000).unwrap();
//! assert_eq!(task.due_ms, 1000);
//! assert_eq!(scheduler.now_ms(), 1000);
//! ```

use serde::{Deserialize, Serialize};

use super::Epoch;

/// Handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Compare the two revealed cards.
    Resolve { first: usize, second: usize },
    /// Advance the elapsed-time counter.
    Tick,
}

/// A task waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Handle returned by `schedule`.
    pub id: TaskId,
    /// Clock time the task fires at.
    pub due_ms: u64,
    /// Game generation the task was scheduled in.
    pub epoch: Epoch,
    /// Work to perform.
    pub kind: TaskKind,
}

/// One-shot task queue driven by an explicit clock.
///
/// Recurring work reschedules itself when it fires.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a task `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, epoch: Epoch, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            epoch,
            kind,
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns true if the task was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.pending.iter().position(|task| task.id == id) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pending tasks, in scheduling order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.pending
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|task| task.due_ms).min()
    }

    /// Remove and return the earliest task due at or before `until_ms`.
    ///
    /// The clock moves to the task's due time so that work it schedules is
    /// measured from the moment it fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledTask> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= until_ms)
            .min_by_key(|(_, task)| (task.due_ms, task.id))
            .map(|(pos, _)| pos)?;

        let task = self.pending.remove(pos);
        self.now_ms = self.now_ms.max(task.due_ms);
        Some(task)
    }

    /// Move the clock to `until_ms`. The clock never goes backwards.
    pub fn set_now(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_assigns_unique_ids() {
        let mut scheduler = Scheduler::new();

        let a = scheduler.schedule(10, Epoch::default(), TaskKind::Tick);
        let b = scheduler.schedule(10, Epoch::default(), TaskKind::Tick);

        assert_ne!(a, b);
        assert_eq!(scheduler.pending_count(), 2);
    }

    #[test]
    fn test_pop_due_orders_by_time_then_schedule_order() {
        let mut scheduler = Scheduler::new();

        let late = scheduler.schedule(200, Epoch::default(), TaskKind::Tick);
        let first = scheduler.schedule(100, Epoch::default(), TaskKind::Tick);
        let second = scheduler.schedule(100, Epoch::default(), TaskKind::Resolve { first: 0, second: 1 });

        assert_eq!(scheduler.pop_due(1000).map(|t| t.id), Some(first));
        assert_eq!(scheduler.pop_due(1000).map(|t| t.id), Some(second));
        assert_eq!(scheduler.pop_due(1000).map(|t| t.id), Some(late));
        assert!(scheduler.pop_due(1000).is_none());
    }

    #[test]
    fn test_pop_due_advances_clock_to_task() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(300, Epoch::default(), TaskKind::Tick);

        let task = scheduler.pop_due(1000).unwrap();
        assert_eq!(task.due_ms, 300);
        assert_eq!(scheduler.now_ms(), 300);

        // Delays are measured from the firing time.
        scheduler.schedule(300, Epoch::default(), TaskKind::Tick);
        assert_eq!(scheduler.next_due_ms(), Some(600));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(10, Epoch::default(), TaskKind::Tick);

        assert!(scheduler.cancel(id));
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!scheduler.cancel(id));
        assert!(scheduler.pop_due(100).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut scheduler = Scheduler::new();

        scheduler.set_now(500);
        scheduler.set_now(100);

        assert_eq!(scheduler.now_ms(), 500);
    }

    #[test]
    fn test_epoch_is_carried() {
        let mut scheduler = Scheduler::new();
        let epoch = Epoch::default().next();
        scheduler.schedule(0, epoch, TaskKind::Tick);

        let task = scheduler.pop_due(0).unwrap();
        assert_eq!(task.epoch, epoch);
    }
}
