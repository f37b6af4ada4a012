//! Game rules for one edition of the game.
//!
//! The business-card and phone editions, and the plain-summary and ranked
//! editions, differ only in the values held here.

use crate::types::{
    ContactKind, ResultDisplay, MATCH_REWARD, MISMATCH_DELAY_MS, MISMATCH_PENALTY, SYMBOLS,
    TIME_BUDGET_SECS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Card faces; each is dealt twice.
    pub symbols: Vec<String>,
    pub time_budget_secs: u32,
    pub match_reward: u32,
    pub mismatch_penalty: u32,
    /// How long a mismatched pair stays face up.
    pub mismatch_delay_ms: u32,
    pub contact: ContactKind,
    pub display: ResultDisplay,
    /// Maximum ranking length. `None` keeps every entry.
    pub ranking_cap: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: SYMBOLS.iter().map(|s| s.to_string()).collect(),
            time_budget_secs: TIME_BUDGET_SECS,
            match_reward: MATCH_REWARD,
            mismatch_penalty: MISMATCH_PENALTY,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            contact: ContactKind::default(),
            display: ResultDisplay::default(),
            ranking_cap: None,
        }
    }
}

impl GameConfig {
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn with_contact(mut self, contact: ContactKind) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_display(mut self, display: ResultDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn with_time_budget_secs(mut self, secs: u32) -> Self {
        self.time_budget_secs = secs;
        self
    }

    pub fn with_mismatch_delay_ms(mut self, ms: u32) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    pub fn with_ranking_cap(mut self, cap: Option<usize>) -> Self {
        self.ranking_cap = cap;
        self
    }

    /// Name of a symbol, or `"?"` for an unknown id.
    pub fn symbol_name(&self, symbol: crate::types::SymbolId) -> &str {
        symbol.name(&self.symbols).unwrap_or("?")
    }
}

/// Short card label: the symbol name without its file extension.
///
/// ```
/// use tui_memory_core::config::symbol_label;
///
/// assert_eq!(symbol_label("01.png"), "01");
/// assert_eq!(symbol_label("star"), "star");
/// ```
pub fn symbol_label(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolId;

    #[test]
    fn test_defaults() {
        let c = GameConfig::default();
        assert_eq!(c.pair_count(), 8);
        assert_eq!(c.time_budget_secs, 30);
        assert_eq!(c.mismatch_delay_ms, 800);
        assert_eq!(c.contact, ContactKind::Business);
        assert_eq!(c.display, ResultDisplay::Ranked);
        assert_eq!(c.ranking_cap, None);
    }

    #[test]
    fn test_builders() {
        let c = GameConfig::default()
            .with_contact(ContactKind::Phone)
            .with_display(ResultDisplay::Plain)
            .with_time_budget_secs(10)
            .with_mismatch_delay_ms(0)
            .with_ranking_cap(Some(5));
        assert_eq!(c.contact, ContactKind::Phone);
        assert_eq!(c.display, ResultDisplay::Plain);
        assert_eq!(c.time_budget_secs, 10);
        assert_eq!(c.mismatch_delay_ms, 0);
        assert_eq!(c.ranking_cap, Some(5));
    }

    #[test]
    fn test_symbol_name() {
        let c = GameConfig::default();
        assert_eq!(c.symbol_name(SymbolId(0)), "01.png");
        assert_eq!(c.symbol_name(SymbolId(7)), "08.png");
        assert_eq!(c.symbol_name(SymbolId(8)), "?");
    }

    #[test]
    fn test_symbol_label_edge_cases() {
        assert_eq!(symbol_label(".hidden"), ".hidden");
        assert_eq!(symbol_label("a.b.png"), "a.b");
    }
}
