//! The dealt hand.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;

/// An ordered sequence of cards as entered by the user.
///
/// Order reflects entry order and duplicates are allowed. A hand is a value:
/// every edit returns a new hand and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DealtHand {
    cards: Vec<Card>,
}

impl DealtHand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from cards in entry order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the most recently entered card, or [`Card::BLANK`] when the
    /// hand is empty.
    #[must_use]
    pub fn trailing(&self) -> Card {
        self.cards.last().copied().unwrap_or(Card::BLANK)
    }

    /// Returns whether every card has both rank and suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_complete)
    }

    /// Returns a new hand with `card` appended.
    #[must_use]
    pub fn pushed(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push(card);
        Self { cards }
    }

    /// Returns a new hand whose trailing card is replaced by `card`.
    ///
    /// On an empty hand the card is appended instead.
    #[must_use]
    pub fn with_trailing(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        match cards.last_mut() {
            Some(last) => *last = card,
            None => cards.push(card),
        }
        Self { cards }
    }

    /// Returns a new hand without the trailing card. An empty hand stays empty.
    #[must_use]
    pub fn popped(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.pop();
        Self { cards }
    }

    /// Returns a new hand with the first card equal to `card` removed.
    ///
    /// Later duplicates and the order of the remaining cards are preserved.
    #[must_use]
    pub fn without(&self, card: &Card) -> Self {
        let mut cards = self.cards.clone();
        if let Some(index) = cards.iter().position(|c| c == card) {
            cards.remove(index);
        }
        Self { cards }
    }

    /// Returns a new hand where repeated cards are collapsed, keeping the
    /// first occurrence of each value.
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.cards.len());
        let cards = self
            .cards
            .iter()
            .copied()
            .filter(|card| seen.insert(*card))
            .collect();
        Self { cards }
    }
}

impl From<Vec<Card>> for DealtHand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for DealtHand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DealtHand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Cards separated by single spaces, e.g. `A♣ 5 ?♥`.
impl fmt::Display for DealtHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
