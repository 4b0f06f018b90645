//! The memory game engine.
//!
//! `MemoryGame` owns the state, the shuffle RNG, the scheduler and the
//! timer. Hosts call `select` and `reset` for input and `advance` to move
//! time; resolution and ticks run inside `advance` when they fall due.
//!
//! ```
//! use std::time::Duration;
//!
//! use memory_match::core::GameConfig;
//! use memory_match::game::{MemoryGame, SelectOutcome};
//!
//! let mut game = MemoryGame::new(GameConfig::with_symbols(["A", "B", "C"]), 42).unwrap();
//!
//! game.select(0).unwrap();
//! let outcome = game.select(1).unwrap();
//! assert!(matches!(outcome, SelectOutcome::PairRevealed { .. }));
//! assert_eq!(game.state().attempts(), 1);
//! assert!(game.state().is_input_locked());
//!
//! game.advance(Duration::from_millis(1000));
//! assert!(!game.state().is_input_locked());
//! assert!(game.state().revealed().is_empty());
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::event::{GameEvent, Observer, SubscriptionId};
use super::state::{GameSnapshot, GameState};
use crate::cards::Deck;
use crate::core::config::duration_ms;
use crate::core::{ConfigError, GameConfig, GameError, GameRng};
use crate::timing::{Epoch, GameTimer, ScheduledTask, Scheduler, TaskKind, TimerState};

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is waiting for resolution.
    InputLocked,
    /// The card is already face-up this attempt.
    AlreadyFlipped,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

/// Result of a card selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The first card of an attempt is face-up.
    Revealed { index: usize },
    /// The second card is face-up; resolution fires at `resolve_at_ms`.
    PairRevealed {
        first: usize,
        second: usize,
        resolve_at_ms: u64,
    },
}

/// A memory-matching game.
pub struct MemoryGame {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    scheduler: Scheduler,
    timer: GameTimer,
    epoch: Epoch,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
    next_subscription: u64,
}

impl MemoryGame {
    /// Create a game with a shuffled deck.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a game shuffled by an existing RNG.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let deck = Deck::shuffled(&config.symbols, &mut rng);
        log::debug!(
            "dealt {} cards from {} symbols (seed {})",
            deck.len(),
            config.pair_count(),
            rng.seed()
        );

        Ok(Self {
            timer: GameTimer::new(),
            state: GameState::new(deck),
            config,
            rng,
            scheduler: Scheduler::new(),
            epoch: Epoch::default(),
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    // === Accessors ===

    /// Configuration the game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current generation.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Game clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Timer lifecycle state.
    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Seed of the shuffle RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Clock time of the next scheduled task, if any.
    ///
    /// Hosts can sleep until then instead of polling.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.scheduler.next_due_ms()
    }

    /// Whether a resolution of the current generation is pending.
    #[must_use]
    pub fn is_resolution_pending(&self) -> bool {
        self.scheduler
            .pending()
            .iter()
            .any(|task| task.epoch == self.epoch && matches!(task.kind, TaskKind::Resolve { .. }))
    }

    /// Detached copy of the state, clock and generation.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state.clone(),
            epoch: self.epoch,
            now_ms: self.scheduler.now_ms(),
            rng: self.rng.state(),
        }
    }

    // === Observers ===

    /// Register an observer. It is notified after every mutation.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer.
    ///
    /// Returns true if it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.observers.iter().position(|(sub, _)| *sub == id) {
            Some(pos) => {
                self.observers.remove(pos);
                true
            }
            None => false,
        }
    }

    fn notify(&mut self, event: GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(&self.state, &event);
        }
    }

    // === Input ===

    /// Select the card at `index`.
    ///
    /// Ignored while a pair awaits resolution and for cards that are already
    /// face-up or matched. The first accepted selection starts the timer.
    /// The second card of an attempt locks input, counts the attempt and
    /// schedules resolution after the configured delay.
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome, GameError> {
        let card = self.state.card(index).ok_or(GameError::CardOutOfRange {
            index,
            len: self.state.len(),
        })?;

        let ignored = if self.state.is_input_locked() {
            Some(IgnoreReason::InputLocked)
        } else if card.is_matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.is_flipped {
            Some(IgnoreReason::AlreadyFlipped)
        } else {
            None
        };
        if let Some(reason) = ignored {
            log::debug!("ignoring selection of {}: {:?}", index, reason);
            return Ok(SelectOutcome::Ignored(reason));
        }

        if self.timer.start(&mut self.scheduler, self.epoch) {
            self.state.set_timer_active(true);
            self.notify(GameEvent::TimerStarted);
        }

        self.state.reveal(index);
        log::debug!("revealed card {} at {}", index, self.scheduler.now_ms());
        self.notify(GameEvent::CardRevealed { index });

        if let &[first, second] = self.state.revealed() {
            self.state.begin_resolution();
            let resolve_at_ms = self
                .scheduler
                .now_ms()
                .saturating_add(self.config.resolve_delay_ms);
            self.scheduler.schedule(
                self.config.resolve_delay_ms,
                self.epoch,
                TaskKind::Resolve { first, second },
            );
            log::debug!(
                "attempt {}: resolving {} and {} at {}",
                self.state.attempts(),
                first,
                second,
                resolve_at_ms
            );
            self.notify(GameEvent::PairRevealed { first, second });
            return Ok(SelectOutcome::PairRevealed {
                first,
                second,
                resolve_at_ms,
            });
        }

        Ok(SelectOutcome::Revealed { index })
    }

    /// Deal a fresh deck and zero every counter.
    ///
    /// Stops the timer and starts a new generation, so any resolution still
    /// scheduled from before the reset does nothing when it fires.
    pub fn reset(&mut self) {
        self.timer.stop(&mut self.scheduler);
        self.epoch = self.epoch.next();

        let deck = Deck::shuffled(&self.config.symbols, &mut self.rng);
        self.state = GameState::new(deck);

        log::info!("game reset ({})", self.epoch);
        self.notify(GameEvent::Reset { epoch: self.epoch });
    }

    // === Time ===

    /// Move the clock forward by `duration`, running every task that falls due.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.scheduler.now_ms().saturating_add(duration_ms(duration));
        self.advance_to(target);
    }

    /// Move the clock to `target_ms`, running every task that falls due.
    ///
    /// Tasks run in due order, each seeing the state left by the ones before.
    /// Targets in the past leave the clock where it is.
    pub fn advance_to(&mut self, target_ms: u64) {
        while let Some(task) = self.scheduler.pop_due(target_ms) {
            self.run_task(task, target_ms);
        }
        self.scheduler.set_now(target_ms);
    }

    fn run_task(&mut self, task: ScheduledTask, target_ms: u64) {
        if task.epoch != self.epoch {
            log::debug!(
                "dropping stale {:?} from {} (current {})",
                task.kind,
                task.epoch,
                self.epoch
            );
            return;
        }

        match task.kind {
            TaskKind::Resolve { first, second } => self.resolve(first, second),
            TaskKind::Tick => match self.timer.on_tick(&mut self.scheduler, &task, target_ms) {
                0 => log::debug!("dropping superseded tick {}", task.id),
                seconds => {
                    self.state.add_elapsed(seconds);
                    let elapsed_seconds = self.state.elapsed_seconds();
                    log::debug!("tick: {}s", elapsed_seconds);
                    self.notify(GameEvent::Tick { elapsed_seconds });
                }
            },
        }
    }

    fn resolve(&mut self, first: usize, second: usize) {
        if self.state.revealed() != [first, second] {
            log::debug!(
                "dropping resolution of {} and {}: revealed is {:?}",
                first,
                second,
                self.state.revealed()
            );
            return;
        }

        match self.state.resolve_pair(first, second) {
            Some(true) => {
                log::debug!("matched {} and {}", first, second);
                self.notify(GameEvent::PairMatched { first, second });
            }
            Some(false) => {
                log::debug!("hid {} and {}", first, second);
                self.notify(GameEvent::PairHidden { first, second });
            }
            None => {
                log::warn!("resolution of {} and {} had no pair to compare", first, second);
                self.notify(GameEvent::ResolutionSkipped { first, second });
            }
        }

        if self.state.is_complete() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let elapsed_seconds = self.state.elapsed_seconds();
        if self.timer.stop(&mut self.scheduler) {
            self.state.set_timer_active(false);
            self.notify(GameEvent::TimerStopped { elapsed_seconds });
        }

        let attempts = self.state.attempts();
        log::info!(
            "all pairs found in {} attempts and {} seconds",
            attempts,
            elapsed_seconds
        );
        self.notify(GameEvent::Completed {
            attempts,
            elapsed_seconds,
        });
    }
}

impl fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("epoch", &self.epoch)
            .field("now_ms", &self.scheduler.now_ms())
            .field("timer", &self.timer.state())
            .field("observers", &self.observers.len())
            .finish()
    }
}
