//! Board module - card faces and per-card state
//!
//! The board only knows about cards. Scoring, timing and the delayed flip-back
//! of a mismatched pair are driven by [`crate::session::GameSession`], which is
//! the only caller that mutates a board during play.
//!
//! At most two cards can be face up without being matched. Once a second card
//! is revealed the pair must be [`Board::resolve`]d; a matched pair leaves the
//! pending slots immediately, a mismatched pair keeps them until both cards are
//! [`Board::rehide`]n.

use arrayvec::ArrayVec;

use crate::deck::Deck;
use crate::types::{CardState, SymbolId};

/// A single card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub symbol: SymbolId,
    pub position: usize,
    pub state: CardState,
}

/// Why a reveal request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealRejection {
    OutOfRange,
    AlreadyMatched,
    AlreadyRevealed,
    /// Two cards are already face up and unresolved
    PairPending,
    /// The session is over
    SessionEnded,
}

impl RevealRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealRejection::OutOfRange => "out_of_range",
            RevealRejection::AlreadyMatched => "already_matched",
            RevealRejection::AlreadyRevealed => "already_revealed",
            RevealRejection::PairPending => "pair_pending",
            RevealRejection::SessionEnded => "session_ended",
        }
    }
}

/// Result of comparing the two pending cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Match {
        first: usize,
        second: usize,
        symbol: SymbolId,
    },
    Mismatch {
        first: usize,
        second: usize,
    },
}

/// Complete board state
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    /// Positions revealed and not yet matched or flipped back, in reveal order.
    pending: ArrayVec<usize, 2>,
    /// Set once a full pending pair has been compared.
    resolved: bool,
    pairs: usize,
}

impl Board {
    /// Lay out a deck face down.
    pub fn new(deck: &Deck) -> Self {
        let cards = deck
            .symbols()
            .iter()
            .enumerate()
            .map(|(position, &symbol)| Card {
                symbol,
                position,
                state: CardState::Hidden,
            })
            .collect();

        Self {
            cards,
            pending: ArrayVec::new(),
            resolved: false,
            pairs: deck.distinct_count(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn state(&self, position: usize) -> Option<CardState> {
        self.cards.get(position).map(|c| c.state)
    }

    /// Positions currently face up and unresolved.
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.state == CardState::Matched)
            .count()
            / 2
    }

    /// Turn a card face up.
    ///
    /// Returns the number of pending cards after the reveal (1 or 2).
    pub fn reveal(&mut self, position: usize) -> Result<usize, RevealRejection> {
        let Some(card) = self.cards.get(position) else {
            return Err(RevealRejection::OutOfRange);
        };

        match card.state {
            CardState::Matched => return Err(RevealRejection::AlreadyMatched),
            CardState::Revealed => return Err(RevealRejection::AlreadyRevealed),
            CardState::Hidden => {}
        }

        if self.pending.is_full() {
            return Err(RevealRejection::PairPending);
        }

        self.cards[position].state = CardState::Revealed;
        self.pending.push(position);
        if self.pending.len() == 1 {
            self.resolved = false;
        }
        Ok(self.pending.len())
    }

    /// Compare the two pending cards.
    ///
    /// Returns `None` unless exactly two cards are pending and they have not
    /// been compared yet. A match locks both cards and frees the pending
    /// slots; a mismatch leaves both face up until they are re-hidden.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if !self.pending.is_full() || self.resolved {
            return None;
        }

        let (first, second) = (self.pending[0], self.pending[1]);
        let symbol = self.cards[first].symbol;

        if symbol == self.cards[second].symbol {
            self.cards[first].state = CardState::Matched;
            self.cards[second].state = CardState::Matched;
            self.pending.clear();
            Some(Resolution::Match {
                first,
                second,
                symbol,
            })
        } else {
            self.resolved = true;
            Some(Resolution::Mismatch { first, second })
        }
    }

    /// Turn a revealed card back face down. Matched cards never flip back.
    pub fn rehide(&mut self, position: usize) -> bool {
        let Some(card) = self.cards.get_mut(position) else {
            return false;
        };
        if card.state != CardState::Revealed {
            return false;
        }

        card.state = CardState::Hidden;
        self.pending.retain(|p| *p != position);
        if self.pending.is_empty() {
            self.resolved = false;
        }
        true
    }

    /// True once every card is matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.state == CardState::Matched)
    }
}
