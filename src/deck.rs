//! A shuffled deck for dealing random hands.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::DealtHand;

/// A single deck of complete cards, drawn from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck, ordered by suit then rank.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::complete(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Deals `count` cards off the top of the deck into a new hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards remain;
    /// the deck is left unchanged in that case.
    pub fn deal(&mut self, count: usize) -> Result<DealtHand, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }
        let mut dealt = self.cards.split_off(remaining - count);
        dealt.reverse();
        Ok(DealtHand::from_cards(dealt))
    }
}
