//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependency on terminal I/O or storage, making it:
//!
//! - **Deterministic**: the same seed deals the same board, and time is passed
//!   in by the caller instead of read from a clock
//! - **Testable**: every rule can be exercised with plain millisecond values
//! - **Portable**: the front end only feeds reveals and ticks
//!
//! # Module Structure
//!
//! - [`rng`]: seedable generator with an unbiased Fisher-Yates shuffle
//! - [`deck`]: paired, shuffled card faces
//! - [`board`]: per-card state and the reveal/resolve/rehide operations
//! - [`scoring`]: reward and floor-at-zero penalty
//! - [`timer`]: wall-clock countdown
//! - [`scheduler`]: cancelable delayed tasks (mismatch flip-back)
//! - [`session`]: the match engine tying everything together
//! - [`outcome`]: final result and reporting
//! - [`ranking`]: leaderboard ordering
//! - [`identity`]: login validation
//!
//! # Game Rules
//!
//! - 8 symbols, each dealt twice on a 4x4 board
//! - At most two unmatched cards face up at once
//! - Match: +10 points, both cards stay face up
//! - Mismatch: -2 points (never below 0), both cards flip back after 800ms
//! - All pairs matched before 30 seconds: victory; otherwise timeout
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Deck, GameConfig, GameSession, RevealOutcome};
//! use tui_memory_core::types::SymbolId;
//!
//! let deck = Deck::from_symbols(
//!     [0u8, 1, 1, 0].iter().map(|&i| SymbolId(i)).collect(),
//! ).unwrap();
//! let mut game = GameSession::with_deck(&GameConfig::default(), "Ana", deck, 0);
//!
//! game.reveal(0, 500);
//! let outcome = game.reveal(3, 900);
//! assert!(matches!(outcome, RevealOutcome::Matched { score: 10, .. }));
//! assert_eq!(game.score(), 10);
//! ```

pub mod board;
pub mod config;
pub mod deck;
pub mod error;
pub mod identity;
pub mod outcome;
pub mod ranking;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Card, Resolution, RevealRejection};
pub use config::GameConfig;
pub use deck::Deck;
pub use error::{DeckError, IdentityError};
pub use identity::PlayerIdentity;
pub use outcome::{GameResult, OutcomeSink, PlainReporter, ResultView};
pub use ranking::{RankingEntry, RankingTable};
pub use rng::SimpleRng;
pub use scheduler::{Scheduler, Task};
pub use scoring::ScoreTracker;
pub use session::{GameSession, RevealOutcome, TickOutcome};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use timer::{Countdown, TimerPoll};
