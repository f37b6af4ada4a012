//! Match engine behavior through the public session API.

use tui_memory::core::{
    Board, Deck, GameConfig, GameSession, RevealOutcome, RevealRejection, ScoreTracker,
};
use tui_memory::types::{CardState, OutcomeKind, SymbolId};

/// 16 cards; positions 0 and 3 hold `01.png`, position 1 holds `02.png`.
const LAYOUT: [u8; 16] = [0, 1, 2, 0, 1, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7];

fn deck(ids: &[u8]) -> Deck {
    Deck::from_symbols(ids.iter().map(|&i| SymbolId(i)).collect()).unwrap()
}

fn session() -> GameSession {
    GameSession::with_deck(&GameConfig::default(), "Ana", deck(&LAYOUT), 0)
}

/// Positions of each pair, in symbol order.
fn pairs(ids: &[u8]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for s in 0..=*ids.iter().max().unwrap() {
        let pos: Vec<usize> = (0..ids.len()).filter(|&i| ids[i] == s).collect();
        out.push((pos[0], pos[1]));
    }
    out
}

#[test]
fn test_end_to_end_match_on_first_symbol() {
    let mut s = session();
    assert_eq!(s.config().symbol_name(s.board().card(0).unwrap().symbol), "01.png");
    assert_eq!(s.config().symbol_name(s.board().card(3).unwrap().symbol), "01.png");

    s.reveal(0, 1_000);
    let out = s.reveal(3, 1_500);
    assert_eq!(
        out,
        RevealOutcome::Matched {
            first: 0,
            second: 3,
            score: 10,
            completed: false
        }
    );
    assert_eq!(s.board().state(0), Some(CardState::Matched));
    assert_eq!(s.board().state(3), Some(CardState::Matched));
    assert_eq!(s.score(), 10);
    assert_eq!(s.score_display(), "Pontos: 10");
}

#[test]
fn test_end_to_end_mismatch_flips_back_and_can_be_revealed_again() {
    let mut s = session();
    s.reveal(0, 1_000);
    let out = s.reveal(1, 1_200);
    assert!(matches!(out, RevealOutcome::Mismatched { score: 0, .. }));
    assert_eq!(s.board().state(0), Some(CardState::Revealed));
    assert_eq!(s.board().state(1), Some(CardState::Revealed));

    // Still face up just before the delay runs out.
    s.tick(1_999);
    assert_eq!(s.board().state(0), Some(CardState::Revealed));

    s.tick(2_000);
    assert_eq!(s.board().state(0), Some(CardState::Hidden));
    assert_eq!(s.board().state(1), Some(CardState::Hidden));

    assert_eq!(s.reveal(1, 2_100), RevealOutcome::Revealed { position: 1 });
}

#[test]
fn test_mismatch_penalty_after_points() {
    let mut s = session();
    s.reveal(0, 0);
    s.reveal(3, 0);
    assert_eq!(s.score(), 10);
    s.reveal(1, 0);
    s.reveal(2, 0);
    assert_eq!(s.score(), 8);
}

#[test]
fn test_penalty_floors_at_zero() {
    let mut tracker = ScoreTracker::new(10, 2);
    assert_eq!(tracker.penalty(), 0);
    assert_eq!(tracker.score(), 0);

    // One point left, then a mismatch: 0, not -1.
    let mut one = ScoreTracker::new(1, 2);
    assert_eq!(one.reward(), 1);
    assert_eq!(one.penalty(), 0);
}

#[test]
fn test_third_reveal_while_pair_pending_has_no_effect() {
    let mut s = session();
    s.reveal(0, 0);
    s.reveal(1, 0);
    let before: Vec<CardState> = s.board().cards().iter().map(|c| c.state).collect();

    assert_eq!(
        s.reveal(2, 100),
        RevealOutcome::Ignored(RevealRejection::PairPending)
    );
    let after: Vec<CardState> = s.board().cards().iter().map(|c| c.state).collect();
    assert_eq!(before, after);
    assert_eq!(s.score(), 0);
}

#[test]
fn test_redundant_reveals_are_ignored() {
    let mut s = session();
    s.reveal(0, 0);
    assert_eq!(
        s.reveal(0, 0),
        RevealOutcome::Ignored(RevealRejection::AlreadyRevealed)
    );
    s.reveal(3, 0);
    assert_eq!(
        s.reveal(3, 0),
        RevealOutcome::Ignored(RevealRejection::AlreadyMatched)
    );
    assert_eq!(
        s.reveal(99, 0),
        RevealOutcome::Ignored(RevealRejection::OutOfRange)
    );
    assert_eq!(s.score(), 10);
}

#[test]
fn test_matched_cards_never_flip_back() {
    let mut s = session();
    s.reveal(0, 0);
    s.reveal(3, 0);
    s.reveal(1, 0);
    s.reveal(2, 0);
    s.tick(10_000);
    assert_eq!(s.board().state(0), Some(CardState::Matched));
    assert_eq!(s.board().state(3), Some(CardState::Matched));
    assert_eq!(s.board().state(1), Some(CardState::Hidden));
}

#[test]
fn test_completing_the_board_wins_exactly_once() {
    let mut s = session();
    let mut t = 0;
    let all = pairs(&LAYOUT);
    for (i, &(a, b)) in all.iter().enumerate() {
        assert!(!s.board().is_complete());
        t += 1_000;
        s.reveal(a, t);
        let out = s.reveal(b, t + 100);
        let last = i + 1 == all.len();
        assert!(matches!(out, RevealOutcome::Matched { completed, .. } if completed == last));
    }

    assert!(s.board().is_complete());
    assert_eq!(s.outcome(), Some(OutcomeKind::Victory));
    let result = s.take_result().unwrap();
    assert_eq!(result.score, 80);
    assert_eq!(result.elapsed_secs, 8);
    assert_eq!(result.message(), "Parabéns! Você venceu com 80 pontos em 8s.");

    // Timer expiry after a win does nothing.
    assert_eq!(s.tick(31_000).ended, None);
    assert_eq!(s.outcome(), Some(OutcomeKind::Victory));
    assert!(s.take_result().is_none());
}

#[test]
fn test_timeout_only_at_budget() {
    let mut s = session();
    assert_eq!(s.tick(29_999).ended, None);
    assert_eq!(s.time_display(29_999), "Tempo: 1s");
    let out = s.tick(30_000);
    assert_eq!(out.ended, Some(OutcomeKind::Timeout));
    assert_eq!(s.time_display(30_000), "Tempo: 0s");

    let result = s.take_result().unwrap();
    assert_eq!(result.kind, OutcomeKind::Timeout);
    assert_eq!(result.elapsed_secs, 30);
    assert_eq!(result.message(), "Tempo esgotado! Você fez 0 pontos.");
    assert_eq!(s.tick(40_000).ended, None);
}

#[test]
fn test_reveal_after_expiry_times_out_instead() {
    let mut s = session();
    // No tick ran since the start; the reveal itself notices the expiry.
    assert_eq!(
        s.reveal(0, 35_000),
        RevealOutcome::Ignored(RevealRejection::SessionEnded)
    );
    assert_eq!(s.outcome(), Some(OutcomeKind::Timeout));
    assert_eq!(s.board().state(0), Some(CardState::Hidden));
}

#[test]
fn test_countdown_display_updates_once_per_second() {
    let mut s = session();
    let mut updates = Vec::new();
    for t in (0..=3_200).step_by(16) {
        if let Some(secs) = s.tick(t).display {
            updates.push(secs);
        }
    }
    assert_eq!(updates, vec![30, 29, 28, 27]);
}

#[test]
fn test_configurable_rules() {
    let config = GameConfig::default()
        .with_time_budget_secs(5)
        .with_mismatch_delay_ms(100);
    let mut s = GameSession::with_deck(&config, "Bia", deck(&LAYOUT), 0);
    s.reveal(0, 0);
    s.reveal(1, 0);
    assert_eq!(s.tick(100).rehidden, 2);
    assert_eq!(s.tick(5_000).ended, Some(OutcomeKind::Timeout));
    assert_eq!(s.take_result().unwrap().elapsed_secs, 5);
}

#[test]
fn test_board_operations_directly() {
    let mut board = Board::new(&deck(&[0, 1, 1, 0]));
    assert_eq!(board.reveal(0), Ok(1));
    assert_eq!(board.reveal(1), Ok(2));
    assert!(board.resolve().is_some());
    // A compared pair is not compared again.
    assert!(board.resolve().is_none());
    assert!(board.rehide(0));
    assert!(board.rehide(1));
    assert!(!board.rehide(1));
    assert!(board.pending().is_empty());
}
