//! Incremental, keystroke-driven hand entry.
//!
//! A card's rank and suit may arrive as two separate keystrokes in either
//! order. Only the trailing card of the hand is ever filled in; every other
//! card is left as it was entered.

use crate::card::{Card, Rank, Suit};
use crate::hand::DealtHand;

pub mod keyboard;

pub use keyboard::{KeyBus, KeyCode, KeyEvent, Subscription};

/// A key that means something to hand entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// A rank key (`A`, `2`-`9`, `0`, `1`, `T`, `J`, `Q`, `K`).
    Rank(Rank),
    /// A suit key (`C`, `D`, `H`, `S` or a suit glyph).
    Suit(Suit),
    /// `?`: a new card whose rank is explicitly unknown.
    UnknownRank,
    /// Escape: discard the whole hand.
    Clear,
    /// Delete or Backspace: remove the trailing card.
    Delete,
}

impl EntryKey {
    /// Maps a key-press character, case-insensitively.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c == '?' {
            return Some(Self::UnknownRank);
        }
        if let Some(rank) = Rank::from_char(c) {
            return Some(Self::Rank(rank));
        }
        match Suit::from_char(c) {
            Some(suit) => Some(Self::Suit(suit)),
            None => None,
        }
    }

    /// Maps a key-down code.
    #[must_use]
    pub const fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Escape => Some(Self::Clear),
            KeyCode::Delete | KeyCode::Backspace => Some(Self::Delete),
            KeyCode::Other => None,
        }
    }

    /// Maps either kind of key event. Unrecognized keys yield `None`.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Option<Self> {
        match event {
            KeyEvent::Down(code) => Self::from_code(code),
            KeyEvent::Press(c) => Self::from_char(c),
        }
    }
}

/// Fill state of the trailing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No trailing card, or a placeholder with neither field set.
    Empty,
    /// Rank entered, suit still missing.
    RankOnly(Rank),
    /// Suit entered, rank still missing.
    SuitOnly(Suit),
    /// Both fields entered.
    Complete(Rank, Suit),
}

impl Slot {
    /// Classifies a card.
    #[must_use]
    pub const fn of(card: Card) -> Self {
        match (card.rank, card.suit) {
            (None, None) => Self::Empty,
            (Some(rank), None) => Self::RankOnly(rank),
            (None, Some(suit)) => Self::SuitOnly(suit),
            (Some(rank), Some(suit)) => Self::Complete(rank, suit),
        }
    }

    /// Classifies the trailing card of a hand.
    #[must_use]
    pub fn trailing(hand: &DealtHand) -> Self {
        Self::of(hand.trailing())
    }
}

/// The edit a key makes to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Replace the trailing card (append it if the hand is empty).
    Fill(Card),
    /// Append a new card.
    Push(Card),
    /// Remove the trailing card.
    Pop,
    /// Replace the hand with the empty hand.
    Reset,
}

/// Computes the edit that `key` makes given the trailing slot.
#[must_use]
pub const fn transition(slot: Slot, key: EntryKey) -> Step {
    match (slot, key) {
        (Slot::Empty, EntryKey::Rank(rank)) => Step::Fill(Card::rank_only(rank)),
        (Slot::SuitOnly(suit), EntryKey::Rank(rank)) => Step::Fill(Card::complete(rank, suit)),
        (Slot::RankOnly(_) | Slot::Complete(..), EntryKey::Rank(rank)) => {
            Step::Push(Card::rank_only(rank))
        }

        (Slot::Empty, EntryKey::Suit(suit)) => Step::Fill(Card::suit_only(suit)),
        (Slot::RankOnly(rank), EntryKey::Suit(suit)) => Step::Fill(Card::complete(rank, suit)),
        (Slot::SuitOnly(_) | Slot::Complete(..), EntryKey::Suit(suit)) => {
            Step::Push(Card::suit_only(suit))
        }

        (_, EntryKey::UnknownRank) => Step::Push(Card::BLANK),
        (_, EntryKey::Clear) => Step::Reset,
        // A complete card goes as a whole. A partial card loses its only
        // field, which leaves nothing worth keeping either.
        (_, EntryKey::Delete) => Step::Pop,
    }
}

/// Returns the hand that results from pressing `key` on `hand`.
#[must_use]
pub fn apply(hand: &DealtHand, key: EntryKey) -> DealtHand {
    match transition(Slot::trailing(hand), key) {
        Step::Fill(card) => hand.with_trailing(card),
        Step::Push(card) => hand.pushed(card),
        Step::Pop => hand.popped(),
        Step::Reset => DealtHand::new(),
    }
}
