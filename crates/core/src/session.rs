//! Session module - the match engine
//!
//! A [`GameSession`] owns everything one playthrough needs: the board, the
//! score, the countdown and the pending flip-back tasks. It is driven by two
//! inputs only:
//!
//! - [`GameSession::reveal`] when the player flips a card
//! - [`GameSession::tick`] from the game loop
//!
//! Both take the current time in milliseconds on the caller's monotonic clock.
//! Before acting, each call first applies whatever became due since the last
//! call (flip-backs, then the countdown), so late ticks never change the
//! outcome.
//!
//! The session ends exactly once, by victory or timeout. Ending stops the
//! countdown, cancels every pending task and stores a [`GameResult`] for the
//! caller to [`take`](GameSession::take_result). After that every input is a
//! no-op.

use crate::board::{Board, Resolution, RevealRejection};
use crate::config::{symbol_label, GameConfig};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::outcome::{score_display, time_display, GameResult};
use crate::rng::SimpleRng;
use crate::scheduler::{Scheduler, Task};
use crate::scoring::ScoreTracker;
use crate::snapshot::{self, CardSnapshot, GameSnapshot};
use crate::timer::Countdown;
use crate::types::OutcomeKind;

/// Result of a reveal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored(RevealRejection),
    /// First card of a pair is face up.
    Revealed { position: usize },
    /// Second card matched the first.
    Matched {
        first: usize,
        second: usize,
        score: u32,
        /// This pair completed the board.
        completed: bool,
    },
    /// Second card did not match; both flip back after the delay.
    Mismatched {
        first: usize,
        second: usize,
        score: u32,
    },
}

/// What a tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Cards flipped back face down.
    pub rehidden: usize,
    /// New countdown value, when the displayed second changed.
    pub display: Option<u32>,
    /// Set on the tick that ended the session.
    pub ended: Option<OutcomeKind>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    player: String,
    board: Board,
    score: ScoreTracker,
    timer: Countdown,
    scheduler: Scheduler,
    /// Set once; doubles as the ended flag.
    outcome: Option<OutcomeKind>,
    result: Option<GameResult>,
}

impl GameSession {
    /// Deal a shuffled board and start the countdown.
    pub fn start(
        config: &GameConfig,
        player: &str,
        rng: &mut SimpleRng,
        now_ms: u64,
    ) -> Result<Self, DeckError> {
        let deck = Deck::shuffled(config.pair_count(), rng)?;
        Ok(Self::with_deck(config, player, deck, now_ms))
    }

    /// Start a session on a fixed deck.
    pub fn with_deck(config: &GameConfig, player: &str, deck: Deck, now_ms: u64) -> Self {
        log::info!(
            "session started: player={player:?} cards={} budget={}s",
            deck.len(),
            config.time_budget_secs
        );

        Self {
            config: config.clone(),
            player: player.to_string(),
            board: Board::new(&deck),
            score: ScoreTracker::new(config.match_reward, config.mismatch_penalty),
            timer: Countdown::start(config.time_budget_secs, now_ms),
            scheduler: Scheduler::new(),
            outcome: None,
            result: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn outcome(&self) -> Option<OutcomeKind> {
        self.outcome
    }

    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    /// A mismatched pair is still waiting to flip back.
    pub fn is_settling(&self) -> bool {
        !self.scheduler.is_empty()
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn remaining_secs(&self, now_ms: u64) -> u32 {
        self.timer.remaining_secs(now_ms)
    }

    pub fn elapsed_secs(&self, now_ms: u64) -> u32 {
        self.timer.elapsed_secs(now_ms)
    }

    pub fn score_display(&self) -> String {
        score_display(self.score())
    }

    pub fn time_display(&self, now_ms: u64) -> String {
        time_display(self.remaining_secs(now_ms))
    }

    /// Flip the card at `position`.
    pub fn reveal(&mut self, position: usize, now_ms: u64) -> RevealOutcome {
        self.advance(now_ms);

        if self.is_ended() {
            return RevealOutcome::Ignored(RevealRejection::SessionEnded);
        }

        match self.board.reveal(position) {
            Err(reason) => {
                log::debug!("reveal {position} ignored: {}", reason.as_str());
                RevealOutcome::Ignored(reason)
            }
            Ok(1) => RevealOutcome::Revealed { position },
            Ok(_) => self.resolve_pair(position, now_ms),
        }
    }

    /// Advance the session clock.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        self.advance(now_ms)
    }

    /// Take the final result. Returns it once, after the session ended.
    pub fn take_result(&mut self) -> Option<GameResult> {
        self.result.take()
    }

    /// Same value as `snapshot(now_ms).fingerprint()`, computed in place.
    pub fn fingerprint(&self, now_ms: u64) -> u64 {
        snapshot::fingerprint(
            self.board.cards().iter().map(|c| c.state),
            self.score(),
            self.remaining_secs(now_ms),
            self.outcome,
        )
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let cards = self
            .board
            .cards()
            .iter()
            .map(|c| CardSnapshot {
                state: c.state,
                face: c
                    .state
                    .is_face_up()
                    .then(|| symbol_label(self.config.symbol_name(c.symbol)).to_string()),
            })
            .collect();

        GameSnapshot {
            cards,
            player: self.player.clone(),
            score: self.score(),
            remaining_secs: self.remaining_secs(now_ms),
            matched_pairs: self.board.matched_pairs(),
            pair_count: self.board.pair_count(),
            outcome: self.outcome,
            settling: self.is_settling(),
        }
    }

    fn resolve_pair(&mut self, position: usize, now_ms: u64) -> RevealOutcome {
        match self.board.resolve() {
            Some(Resolution::Match { first, second, .. }) => {
                let score = self.score.reward();
                let completed = self.board.is_complete();
                log::debug!("match {first}/{second}, score={score}");
                if completed {
                    self.finish(OutcomeKind::Victory, now_ms);
                }
                RevealOutcome::Matched {
                    first,
                    second,
                    score,
                    completed,
                }
            }
            Some(Resolution::Mismatch { first, second }) => {
                let score = self.score.penalty();
                let due = now_ms.saturating_add(self.config.mismatch_delay_ms as u64);
                self.scheduler.schedule(due, Task::Rehide { first, second });
                log::debug!("mismatch {first}/{second}, score={score}");
                RevealOutcome::Mismatched {
                    first,
                    second,
                    score,
                }
            }
            None => RevealOutcome::Revealed { position },
        }
    }

    fn advance(&mut self, now_ms: u64) -> TickOutcome {
        let mut out = TickOutcome::default();
        if self.is_ended() {
            return out;
        }

        while let Some(task) = self.scheduler.pop_due(now_ms) {
            match task {
                Task::Rehide { first, second } => {
                    for p in [first, second] {
                        if self.board.rehide(p) {
                            out.rehidden += 1;
                        }
                    }
                }
            }
        }

        let poll = self.timer.poll(now_ms);
        out.display = poll.display;
        if poll.expired && self.finish(OutcomeKind::Timeout, now_ms) {
            out.ended = Some(OutcomeKind::Timeout);
        }
        out
    }

    /// Single finalization path. Returns false if the session already ended.
    fn finish(&mut self, kind: OutcomeKind, now_ms: u64) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(kind);
        self.timer.stop(now_ms);
        let cancelled = self.scheduler.cancel_all();

        let elapsed = self.timer.elapsed_secs(now_ms);
        let elapsed_secs = match kind {
            OutcomeKind::Victory => elapsed,
            OutcomeKind::Timeout => elapsed.min(self.timer.budget_secs()),
        };

        let result = GameResult {
            kind,
            player: self.player.clone(),
            score: self.score(),
            elapsed_secs,
        };
        log::info!(
            "session ended: {} score={} elapsed={}s cancelled_tasks={cancelled}",
            kind.as_str(),
            result.score,
            result.elapsed_secs
        );
        self.result = Some(result);
        true
    }
}
