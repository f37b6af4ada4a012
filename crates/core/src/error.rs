//! Error types for the game core.

use thiserror::Error;

use crate::types::ContactKind;

/// Errors raised while building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("a deck needs at least 2 distinct symbols, got {count}")]
    TooFewSymbols { count: usize },

    #[error("at most 256 distinct symbols are supported, got {count}")]
    TooManySymbols { count: usize },

    #[error("symbol {symbol} appears {copies} times, expected exactly 2")]
    Unpaired { symbol: u8, copies: usize },
}

/// Login data rejected by validation.
///
/// The display text is the message shown under the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("{}", invalid_identity_message(.kind))]
    InvalidName { kind: ContactKind },

    #[error("{}", invalid_identity_message(.kind))]
    InvalidContact { kind: ContactKind },
}

fn invalid_identity_message(kind: &ContactKind) -> &'static str {
    match kind {
        ContactKind::Business => "Informe um nome e uma empresa válidos.",
        ContactKind::Phone => "Informe um nome e um telefone válidos.",
    }
}
