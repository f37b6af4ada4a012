//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Board Layout
//!
//! The board is a 4x4 grid holding 8 pairs:
//!
//! - **Columns**: 4 (indexed 0-3)
//! - **Rows**: 4 (indexed 0-3)
//! - **Positions**: row-major, `position = row * BOARD_COLS + col`
//!
//! # Game Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIME_BUDGET_SECS` | 30 | Countdown budget for one session |
//! | `MATCH_REWARD` | 10 | Points for a matched pair |
//! | `MISMATCH_PENALTY` | 2 | Points lost on a mismatch (score floors at 0) |
//! | `MISMATCH_DELAY_MS` | 800 | Time a mismatched pair stays face up |
//! | `TICK_MS` | 16 | Fixed loop interval (~60 FPS) |
//! | `RANKING_TOP_N` | 3 | Entries shown on the result screen |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardState, Direction, GameAction, SymbolId, SYMBOLS};
//!
//! assert_eq!(SymbolId(0).name(&SYMBOLS), Some("01.png"));
//! assert_eq!(GameAction::from_str("flip"), Some(GameAction::Flip));
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
//! assert!(CardState::Matched.is_face_up());
//! ```

/// Default card faces. Each one appears exactly twice on the board.
pub const SYMBOLS: [&str; 8] = [
    "01.png", "02.png", "03.png", "04.png", "05.png", "06.png", "07.png", "08.png",
];

/// Number of distinct symbols (pairs) on the default board.
pub const PAIR_COUNT: usize = SYMBOLS.len();

/// Number of cards on the default board.
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Board width in cards
pub const BOARD_COLS: u8 = 4;

/// Board height in cards
pub const BOARD_ROWS: u8 = 4;

/// A deck needs at least this many distinct symbols to be playable.
pub const MIN_DISTINCT_SYMBOLS: usize = 2;

/// Fixed loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Countdown budget for a session (30 seconds)
pub const TIME_BUDGET_SECS: u32 = 30;

/// Points awarded for a matched pair
pub const MATCH_REWARD: u32 = 10;

/// Points deducted for a mismatched pair
pub const MISMATCH_PENALTY: u32 = 2;

/// How long a mismatched pair stays face up before flipping back (800ms)
pub const MISMATCH_DELAY_MS: u32 = 800;

/// Cadence of the cosmetic countdown display update
pub const TIMER_DISPLAY_INTERVAL_MS: u32 = 1000;

/// Number of ranking entries shown after a ranked game
pub const RANKING_TOP_N: usize = 3;

/// Identifier of a card face: an index into the configured symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u8);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Resolve the symbol name from a symbol table.
    pub fn name<S: AsRef<str>>(self, table: &[S]) -> Option<&str> {
        table.get(self.index()).map(|s| s.as_ref())
    }
}

/// Per-card state
///
/// - **Hidden**: face down (initial)
/// - **Revealed**: face up, waiting to be compared or flipped back
/// - **Matched**: face up for the rest of the session (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl CardState {
    pub fn is_face_up(&self) -> bool {
        !matches!(self, CardState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Hidden => "hidden",
            CardState::Revealed => "revealed",
            CardState::Matched => "matched",
        }
    }
}

/// Cursor movement direction on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player actions on the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one card
    Move(Direction),
    /// Flip the card under the cursor
    Flip,
    /// Throw away the current session and deal a new board
    Restart,
    /// Leave the game and go back to the login screen
    Menu,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("UP"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Move(Direction::Up)),
            "down" => Some(GameAction::Move(Direction::Down)),
            "left" => Some(GameAction::Move(Direction::Left)),
            "right" => Some(GameAction::Move(Direction::Right)),
            "flip" => Some(GameAction::Flip),
            "restart" => Some(GameAction::Restart),
            "menu" => Some(GameAction::Menu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "up",
            GameAction::Move(Direction::Down) => "down",
            GameAction::Move(Direction::Left) => "left",
            GameAction::Move(Direction::Right) => "right",
            GameAction::Flip => "flip",
            GameAction::Restart => "restart",
            GameAction::Menu => "menu",
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Every pair was matched before the countdown ran out
    Victory,
    /// The countdown reached zero first
    Timeout,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Victory => "victory",
            OutcomeKind::Timeout => "timeout",
        }
    }
}

/// Which contact field the login form collects next to the player name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactKind {
    /// Free-form company name
    #[default]
    Business,
    /// Phone number (digits, formatting characters allowed)
    Phone,
}

impl ContactKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "business" | "empresa" => Some(ContactKind::Business),
            "phone" | "telefone" => Some(ContactKind::Phone),
            _ => None,
        }
    }

    /// JSON field name used for this contact in the stored profile.
    pub fn field_name(&self) -> &'static str {
        match self {
            ContactKind::Business => "empresa",
            ContactKind::Phone => "telefone",
        }
    }

    /// Label shown on the login form.
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Business => "Empresa",
            ContactKind::Phone => "Telefone",
        }
    }
}

/// What the result screen shows after a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultDisplay {
    /// One-off summary line
    Plain,
    /// Summary plus the persisted top-N leaderboard
    #[default]
    Ranked,
}

impl ResultDisplay {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "simple" => Some(ResultDisplay::Plain),
            "ranked" | "ranking" => Some(ResultDisplay::Ranked),
            _ => None,
        }
    }
}
