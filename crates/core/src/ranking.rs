//! Leaderboard ordering
//!
//! Entries are kept sorted by score (highest first), ties broken by elapsed
//! time (fastest first). Insertion is stable: an entry that ties exactly with
//! existing ones goes after them. Entries are never edited once inserted.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::outcome::GameResult;

/// One finished game, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(rename = "nome")]
    pub name: String,
    pub score: u32,
    /// Seconds played.
    pub elapsed: u32,
    /// Epoch milliseconds when the game ended.
    pub ts: i64,
}

impl RankingEntry {
    pub fn from_result(result: &GameResult, ts: i64) -> Self {
        Self {
            name: result.player.clone(),
            score: result.score,
            elapsed: result.elapsed_secs,
            ts,
        }
    }
}

/// Leaderboard order: score descending, then elapsed ascending.
pub fn rank_order(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.score.cmp(&a.score).then(a.elapsed.cmp(&b.elapsed))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
}

impl RankingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from stored entries, restoring the ordering.
    pub fn from_entries(mut entries: Vec<RankingEntry>) -> Self {
        entries.sort_by(rank_order);
        Self { entries }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankingEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry at its rank. Returns the 0-based rank.
    pub fn insert(&mut self, entry: RankingEntry) -> usize {
        let at = self
            .entries
            .partition_point(|e| rank_order(e, &entry) != Ordering::Greater);
        self.entries.insert(at, entry);
        at
    }

    /// Drop everything past `cap` entries. Returns how many were dropped.
    pub fn truncate(&mut self, cap: usize) -> usize {
        let dropped = self.entries.len().saturating_sub(cap);
        self.entries.truncate(cap);
        dropped
    }

    pub fn top(&self, n: usize) -> &[RankingEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}
