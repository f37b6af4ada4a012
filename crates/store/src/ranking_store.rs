//! Persisted leaderboard
//!
//! The ranking lives under [`RANKING_KEY`] as a JSON array. Recording a result
//! is one load-append-sort-save pass. Two processes sharing a data directory
//! can interleave those passes; the last save wins and the other entry is lost.

use crate::core::outcome::{GameResult, OutcomeSink, ResultView};
use crate::core::{RankingEntry, RankingTable};
use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::types::RANKING_TOP_N;

/// Storage key of the ranking.
pub const RANKING_KEY: &str = "memoria_ranking";

#[derive(Debug, Clone)]
pub struct RankingStore<S> {
    kv: S,
    cap: Option<usize>,
}

impl<S: KeyValueStore> RankingStore<S> {
    /// `cap` limits how many entries are kept; `None` keeps all of them.
    pub fn new(kv: S, cap: Option<usize>) -> Self {
        Self { kv, cap }
    }

    pub fn try_load(&self) -> Result<RankingTable> {
        let Some(raw) = self.kv.get(RANKING_KEY)? else {
            return Ok(RankingTable::new());
        };
        let entries: Vec<RankingEntry> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: RANKING_KEY.to_string(),
                source,
            })?;
        Ok(RankingTable::from_entries(entries))
    }

    /// Stored ranking, or an empty one when missing or unreadable.
    pub fn load(&self) -> RankingTable {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("ignoring stored ranking: {e}");
            RankingTable::new()
        })
    }

    /// Append an entry and persist the table. Returns the updated table.
    pub fn record(&mut self, entry: RankingEntry) -> Result<RankingTable> {
        let mut table = self.load();
        match place(&mut table, entry, self.cap) {
            Some(rank) => log::info!("ranking entry stored at #{}", rank + 1),
            None => log::info!(
                "ranking entry fell below the cap of {} and was not kept",
                self.cap.unwrap_or_default()
            ),
        }

        let raw = serde_json::to_string(table.entries()).map_err(|source| StoreError::Encode {
            key: RANKING_KEY.to_string(),
            source,
        })?;
        self.kv.set(RANKING_KEY, &raw)?;
        Ok(table)
    }
}

/// Insert `entry` and apply `cap`. Returns the entry's rank if it survived
/// the cap.
fn place(table: &mut RankingTable, entry: RankingEntry, cap: Option<usize>) -> Option<usize> {
    let rank = table.insert(entry);
    let Some(cap) = cap else {
        return Some(rank);
    };
    let dropped = table.truncate(cap);
    if dropped > 0 {
        log::debug!("ranking capped at {cap}, dropped {dropped}");
    }
    (rank < cap).then_some(rank)
}

/// Reporter for the ranked edition: stores every result and shows the top
/// entries.
#[derive(Debug, Clone)]
pub struct RankedReporter<S> {
    store: RankingStore<S>,
    top_n: usize,
}

impl<S: KeyValueStore> RankedReporter<S> {
    pub fn new(store: RankingStore<S>) -> Self {
        Self {
            store,
            top_n: RANKING_TOP_N,
        }
    }

    pub fn store(&self) -> &RankingStore<S> {
        &self.store
    }
}

impl<S: KeyValueStore> OutcomeSink for RankedReporter<S> {
    fn report(&mut self, result: &GameResult) -> ResultView {
        let entry = RankingEntry::from_result(result, crate::now_ms());

        let table = match self.store.record(entry.clone()) {
            Ok(table) => table,
            Err(e) => {
                // Show the result anyway, ranked against what could be read.
                log::warn!("could not save ranking: {e}");
                let mut table = self.store.load();
                table.insert(entry);
                table
            }
        };

        ResultView::Ranked {
            message: result.message(),
            top: table.top(self.top_n).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::types::OutcomeKind;

    fn entry(name: &str, score: u32, elapsed: u32) -> RankingEntry {
        RankingEntry {
            name: name.to_string(),
            score,
            elapsed,
            ts: 1,
        }
    }

    #[test]
    fn test_record_persists_sorted() {
        let kv = MemoryStore::new();
        let mut store = RankingStore::new(kv.clone(), None);
        store.record(entry("slow", 20, 15)).unwrap();
        store.record(entry("fast", 20, 10)).unwrap();

        let raw = kv.get(RANKING_KEY).unwrap().unwrap();
        let stored: Vec<RankingEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored[0].name, "fast");
        assert_eq!(stored[1].name, "slow");
    }

    #[test]
    fn test_unsorted_storage_is_reordered_on_load() {
        let mut kv = MemoryStore::new();
        kv.set(
            RANKING_KEY,
            r#"[{"nome":"a","score":2,"elapsed":5,"ts":0},{"nome":"b","score":9,"elapsed":5,"ts":0}]"#,
        )
        .unwrap();
        let table = RankingStore::new(kv, None).load();
        assert_eq!(table.entries()[0].name, "b");
    }

    #[test]
    fn test_malformed_ranking_starts_fresh() {
        let mut kv = MemoryStore::new();
        kv.set(RANKING_KEY, "{\"oops\":true}").unwrap();
        let mut store = RankingStore::new(kv, None);
        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());

        let table = store.record(entry("a", 10, 3)).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_cap_drops_lowest() {
        let mut store = RankingStore::new(MemoryStore::new(), Some(2));
        store.record(entry("a", 10, 3)).unwrap();
        store.record(entry("b", 30, 3)).unwrap();
        let table = store.record(entry("c", 20, 3)).unwrap();
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn test_place_reports_rank_after_cap() {
        let mut table = RankingTable::from_entries(vec![entry("a", 30, 3), entry("b", 20, 3)]);
        assert_eq!(place(&mut table, entry("c", 25, 3), Some(3)), Some(1));
        // Lowest score lands past the cap and is dropped.
        assert_eq!(place(&mut table, entry("d", 5, 3), Some(3)), None);
        assert_eq!(table.len(), 3);
        assert!(table.entries().iter().all(|e| e.name != "d"));

        // A better entry pushes the last one out but keeps its own rank.
        assert_eq!(place(&mut table, entry("e", 40, 3), Some(3)), Some(0));
        assert!(table.entries().iter().all(|e| e.name != "b"));
        assert_eq!(place(&mut table, entry("f", 1, 3), None), Some(3));
    }

    #[test]
    fn test_uncapped_keeps_everything() {
        let mut store = RankingStore::new(MemoryStore::new(), None);
        for i in 0..50 {
            store.record(entry("p", i, 10)).unwrap();
        }
        assert_eq!(store.load().len(), 50);
    }

    #[test]
    fn test_ranked_reporter_returns_top_three() {
        let mut reporter = RankedReporter::new(RankingStore::new(MemoryStore::new(), None));
        for (name, score) in [("a", 10), ("b", 40), ("c", 30), ("d", 20)] {
            reporter.report(&GameResult {
                kind: OutcomeKind::Timeout,
                player: name.to_string(),
                score,
                elapsed_secs: 30,
            });
        }

        let view = reporter.report(&GameResult {
            kind: OutcomeKind::Victory,
            player: "e".to_string(),
            score: 35,
            elapsed_secs: 22,
        });
        assert_eq!(view.message(), "Parabéns! Você venceu com 35 pontos em 22s.");
        let top: Vec<&str> = view.top().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(top, ["b", "e", "c"]);
        assert_eq!(reporter.store().load().len(), 5);
    }
}
