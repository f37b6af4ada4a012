//! Local persistence for the memory game.
//!
//! Everything is stored as JSON through a small [`KeyValueStore`] trait:
//!
//! | Key | Contents |
//! |-----|----------|
//! | `jogador_memoria` | last player profile (`nome`, `empresa`/`telefone`, `ts`) |
//! | `memoria_ranking` | leaderboard entries (`nome`, `score`, `elapsed`, `ts`) |
//!
//! Storage is best-effort. Corrupt or missing data reads as empty, and write
//! failures are logged without interrupting the game.
//!
//! # Example
//!
//! ```
//! use tui_memory_store::{MemoryStore, ProfileStore};
//! use tui_memory_store::core::PlayerIdentity;
//! use tui_memory_store::types::ContactKind;
//!
//! let mut profiles = ProfileStore::new(MemoryStore::new());
//! let player = PlayerIdentity::validate("Ana", "ACME", ContactKind::Business).unwrap();
//! profiles.remember(&player);
//! assert_eq!(profiles.load().name, "Ana");
//! ```

pub mod error;
pub mod kv;
pub mod profile;
pub mod ranking_store;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use error::{Result, StoreError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use profile::{export_profile, PlayerProfile, ProfileStore, EXPORT_FILE_NAME, PROFILE_KEY};
pub use ranking_store::{RankedReporter, RankingStore, RANKING_KEY};

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
