//! Error types for strict parsing and dealing.
//!
//! Hand entry itself never fails: free text and keystrokes degrade to an
//! empty hand or a no-op. These errors only come from the explicit
//! single-card [`FromStr`](core::str::FromStr) impls and from dealing.

use thiserror::Error;

/// Errors that can occur when parsing a single card, rank or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Input was empty.
    #[error("empty card string")]
    Empty,
    /// Rank part was not recognized.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit part was not recognized.
    #[error("invalid suit")]
    InvalidSuit,
    /// Extra characters followed a complete card.
    #[error("unexpected trailing input after card")]
    TrailingInput,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}
