//! End-of-game reporting
//!
//! A finished session yields exactly one [`GameResult`]. What the player sees
//! afterwards depends on the edition: the plain edition shows a one-line
//! summary, the ranked edition also records the result and shows the top of
//! the leaderboard. Both go through [`OutcomeSink`].

use crate::ranking::RankingEntry;
use crate::types::OutcomeKind;

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub kind: OutcomeKind,
    pub player: String,
    pub score: u32,
    /// Whole seconds played. Equal to the budget on timeout.
    pub elapsed_secs: u32,
}

impl GameResult {
    /// End-of-game message shown to the player.
    pub fn message(&self) -> String {
        match self.kind {
            OutcomeKind::Victory => format!(
                "Parabéns! Você venceu com {} pontos em {}s.",
                self.score, self.elapsed_secs
            ),
            OutcomeKind::Timeout => format!("Tempo esgotado! Você fez {} pontos.", self.score),
        }
    }
}

/// What the result screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Summary {
        message: String,
    },
    Ranked {
        message: String,
        top: Vec<RankingEntry>,
    },
}

impl ResultView {
    pub fn message(&self) -> &str {
        match self {
            ResultView::Summary { message } | ResultView::Ranked { message, .. } => message,
        }
    }

    pub fn top(&self) -> &[RankingEntry] {
        match self {
            ResultView::Summary { .. } => &[],
            ResultView::Ranked { top, .. } => top,
        }
    }
}

/// Receives the result of every finished session.
pub trait OutcomeSink {
    fn report(&mut self, result: &GameResult) -> ResultView;
}

/// Summary-only reporting; nothing is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainReporter;

impl OutcomeSink for PlainReporter {
    fn report(&mut self, result: &GameResult) -> ResultView {
        ResultView::Summary {
            message: result.message(),
        }
    }
}

/// Score line for the game screen.
pub fn score_display(score: u32) -> String {
    format!("Pontos: {score}")
}

/// Countdown line for the game screen.
pub fn time_display(remaining_secs: u32) -> String {
    format!("Tempo: {remaining_secs}s")
}
