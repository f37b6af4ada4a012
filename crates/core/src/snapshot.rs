use crate::types::{CardState, OutcomeKind};

/// Render-facing view of one card. The face is only present while the card
/// is face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub state: CardState,
    pub face: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub player: String,
    pub score: u32,
    pub remaining_secs: u32,
    pub matched_pairs: usize,
    pub pair_count: usize,
    pub outcome: Option<OutcomeKind>,
    /// A mismatched pair is waiting to flip back.
    pub settling: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.outcome.is_none()
    }

    /// Cheap fingerprint for change detection between frames.
    pub fn fingerprint(&self) -> u64 {
        fingerprint(
            self.cards.iter().map(|c| c.state),
            self.score,
            self.remaining_secs,
            self.outcome,
        )
    }
}

/// FNV-1a over the values a frame depends on. Shared by snapshots and by
/// sessions, which hash their state in place without allocating.
pub(crate) fn fingerprint(
    states: impl Iterator<Item = CardState>,
    score: u32,
    remaining_secs: u32,
    outcome: Option<OutcomeKind>,
) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    let mut mix = |v: u64| {
        h ^= v;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    };
    for state in states {
        mix(state as u64);
    }
    mix(score as u64);
    mix(remaining_secs as u64);
    mix(outcome.map_or(0, |o| o as u64 + 1));
    h
}
