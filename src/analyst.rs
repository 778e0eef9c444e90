//! Hand state holder tying text entry, keystrokes and analysis together.

extern crate alloc;

use alloc::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::analysis::{Analysis, analyze};
use crate::card::Card;
use crate::deck::Deck;
use crate::entry::{self, EntryKey, KeyBus, KeyEvent, Subscription};
use crate::error::DealError;
use crate::hand::DealtHand;
use crate::options::AnalystOptions;
use crate::parser::parse_hand_with;
use crate::sync::Mutex;

/// Owns the current dealt hand and replaces it on every input.
///
/// The hand is never edited in place: each operation computes the next hand
/// from the current one and swaps it in whole. All methods take `&self`, so
/// an analyst can be shared with a [`KeyBus`] listener through an [`Arc`].
pub struct Analyst {
    /// Analyst options.
    pub options: AnalystOptions,
    /// Current hand.
    hand: Mutex<DealtHand>,
    /// Random number generator for dealing.
    rng: Mutex<ChaCha8Rng>,
}

impl Analyst {
    /// Creates an analyst with an empty hand. `seed` drives [`Analyst::deal`].
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Analyst, AnalystOptions};
    ///
    /// let analyst = Analyst::new(AnalystOptions::default(), 42);
    /// assert!(analyst.hand().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: AnalystOptions, seed: u64) -> Self {
        Self {
            options,
            hand: Mutex::new(DealtHand::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns a copy of the current hand.
    pub fn hand(&self) -> DealtHand {
        self.hand.lock().clone()
    }

    fn replace(&self, next: DealtHand) -> DealtHand {
        log::debug!("hand is now [{next}]");
        self.hand.replace(next.clone());
        next
    }

    /// Replaces the hand with whatever `text` specifies.
    ///
    /// Consumes the text field's full value; unparseable text gives the
    /// empty hand. Repeated cards follow [`AnalystOptions::duplicates`].
    pub fn set_text(&self, text: &str) -> DealtHand {
        self.replace(parse_hand_with(text, self.options.duplicates))
    }

    /// Applies an entry key to the hand and returns the new hand.
    pub fn press(&self, key: EntryKey) -> DealtHand {
        let next = entry::apply(&self.hand.lock(), key);
        log::trace!("{key:?} pressed");
        self.replace(next)
    }

    /// Handles a raw key event.
    ///
    /// Returns `false`, leaving the hand alone, for keys hand entry does not
    /// recognize.
    pub fn handle_key(&self, event: KeyEvent) -> bool {
        match EntryKey::from_event(event) {
            Some(key) => {
                self.press(key);
                true
            }
            None => false,
        }
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns whether a card was removed.
    pub fn remove_card(&self, card: &Card) -> bool {
        let current = self.hand();
        let next = current.without(card);
        if next.len() == current.len() {
            return false;
        }
        self.replace(next);
        true
    }

    /// Replaces the hand with the empty hand.
    pub fn clear(&self) {
        self.replace(DealtHand::new());
    }

    /// Replaces the hand with [`AnalystOptions::deal_size`] cards from a
    /// freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal size exceeds the deck. The hand is left
    /// unchanged in that case.
    pub fn deal(&self) -> Result<DealtHand, DealError> {
        let mut deck = Deck::shuffled(&mut *self.rng.lock());
        let hand = deck.deal(usize::from(self.options.deal_size))?;
        Ok(self.replace(hand))
    }

    /// Lists every keep/discard split of the current hand.
    pub fn analysis(&self) -> Analysis {
        analyze(&self.hand(), self.options.duplicates)
    }

    /// Routes events from `bus` to this analyst until the returned
    /// subscription is released or dropped.
    pub fn attach_keyboard<'b>(self: &Arc<Self>, bus: &'b KeyBus) -> Subscription<'b> {
        let analyst = Arc::clone(self);
        bus.subscribe(move |event| analyst.handle_key(event))
    }
}
