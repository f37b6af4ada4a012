//! Deck module - paired, shuffled card faces
//!
//! A deck holds every symbol exactly twice. [`Deck::shuffled`] duplicates the
//! symbol set and applies a Fisher-Yates pass; [`Deck::from_symbols`] accepts a
//! fixed order (tests, replays) after checking the pairing invariant.

use std::collections::BTreeMap;

use crate::error::DeckError;
use crate::rng::SimpleRng;
use crate::types::{SymbolId, MIN_DISTINCT_SYMBOLS};

/// Ordered card faces, position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    symbols: Vec<SymbolId>,
    distinct: usize,
}

impl Deck {
    /// Deal `distinct` pairs in random order.
    pub fn shuffled(distinct: usize, rng: &mut SimpleRng) -> Result<Self, DeckError> {
        check_distinct(distinct)?;

        let mut symbols: Vec<SymbolId> = (0..distinct)
            .chain(0..distinct)
            .map(|i| SymbolId(i as u8))
            .collect();
        rng.shuffle(&mut symbols);

        Ok(Self { symbols, distinct })
    }

    /// Build a deck in the given order.
    pub fn from_symbols(symbols: Vec<SymbolId>) -> Result<Self, DeckError> {
        let mut copies: BTreeMap<SymbolId, usize> = BTreeMap::new();
        for &s in &symbols {
            *copies.entry(s).or_default() += 1;
        }

        check_distinct(copies.len())?;
        if let Some((symbol, &n)) = copies.iter().find(|(_, &n)| n != 2) {
            return Err(DeckError::Unpaired {
                symbol: symbol.0,
                copies: n,
            });
        }

        Ok(Self {
            distinct: copies.len(),
            symbols,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of pairs in the deck.
    pub fn distinct_count(&self) -> usize {
        self.distinct
    }

    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    pub fn get(&self, position: usize) -> Option<SymbolId> {
        self.symbols.get(position).copied()
    }
}

fn check_distinct(count: usize) -> Result<(), DeckError> {
    if count < MIN_DISTINCT_SYMBOLS {
        return Err(DeckError::TooFewSymbols { count });
    }
    if count > u8::MAX as usize + 1 {
        return Err(DeckError::TooManySymbols { count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[u8]) -> Vec<SymbolId> {
        v.iter().map(|&i| SymbolId(i)).collect()
    }

    #[test]
    fn test_shuffled_has_two_of_each() {
        let mut rng = SimpleRng::new(42);
        let deck = Deck::shuffled(8, &mut rng).unwrap();

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.distinct_count(), 8);
        for s in 0..8u8 {
            let n = deck.symbols().iter().filter(|&&x| x == SymbolId(s)).count();
            assert_eq!(n, 2, "symbol {s} should appear twice");
        }
    }

    #[test]
    fn test_shuffled_is_seed_deterministic() {
        let a = Deck::shuffled(8, &mut SimpleRng::new(7)).unwrap();
        let b = Deck::shuffled(8, &mut SimpleRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffled_rejects_single_symbol() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            Deck::shuffled(1, &mut rng),
            Err(DeckError::TooFewSymbols { count: 1 })
        );
        assert_eq!(
            Deck::shuffled(0, &mut rng),
            Err(DeckError::TooFewSymbols { count: 0 })
        );
    }

    #[test]
    fn test_shuffled_rejects_oversized_symbol_set() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            Deck::shuffled(300, &mut rng),
            Err(DeckError::TooManySymbols { count: 300 })
        );
    }

    #[test]
    fn test_from_symbols_accepts_pairs() {
        let deck = Deck::from_symbols(ids(&[0, 1, 1, 0])).unwrap();
        assert_eq!(deck.distinct_count(), 2);
        assert_eq!(deck.get(2), Some(SymbolId(1)));
        assert_eq!(deck.get(4), None);
    }

    #[test]
    fn test_from_symbols_rejects_unpaired() {
        assert_eq!(
            Deck::from_symbols(ids(&[0, 1, 1, 0, 1])),
            Err(DeckError::Unpaired {
                symbol: 1,
                copies: 3
            })
        );
        assert_eq!(
            Deck::from_symbols(ids(&[0, 0])),
            Err(DeckError::TooFewSymbols { count: 1 })
        );
    }
}
