//! Keep/discard enumeration.
//!
//! Every way to keep [`KEEP_SIZE`] cards of a hand is listed in the standard
//! lexicographic order of the kept indices, so the same hand always yields
//! the same list and each entry can be keyed by its selection.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::DealtHand;
use crate::options::DuplicatePolicy;

/// Number of cards kept from a dealt hand.
pub const KEEP_SIZE: usize = 4;

/// Score of a keep. Scoring is not implemented yet, so it is always unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Score {
    /// Not scored.
    #[default]
    Unknown,
}

/// One split of a hand into kept and discarded cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Indices of the kept cards in the analyzed hand, ascending.
    pub selection: Vec<usize>,
    /// Kept cards, in hand order.
    pub keep: Vec<Card>,
    /// Discarded cards, in hand order.
    pub discard: Vec<Card>,
    /// Score of the keep.
    pub score: Score,
}

/// Result of analyzing a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Analysis {
    /// The hand is too small to keep [`KEEP_SIZE`] cards.
    NotEnoughCards {
        /// Cards in the analyzed hand.
        have: usize,
        /// Cards required.
        need: usize,
    },
    /// Every keep/discard split, in enumeration order.
    Partitions(Vec<Partition>),
}

impl Analysis {
    /// Returns whether the hand was too small to analyze.
    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::NotEnoughCards { .. })
    }

    /// Returns the partitions, empty when the hand was too small.
    #[must_use]
    pub fn partitions(&self) -> &[Partition] {
        match self {
            Self::NotEnoughCards { .. } => &[],
            Self::Partitions(partitions) => partitions,
        }
    }
}

/// Returns every `k`-sized ascending index selection out of `0..n` in
/// lexicographic order.
///
/// There are none when `n < k`, and exactly one (empty) when `k == 0`.
#[must_use]
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.clone());

        // rightmost index that can still move up
        let Some(i) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            break;
        };
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
    out
}

fn split(cards: &[Card], selection: Vec<usize>) -> Partition {
    let mut keep = Vec::with_capacity(selection.len());
    let mut discard = Vec::with_capacity(cards.len().saturating_sub(selection.len()));
    let mut selected = selection.iter().peekable();

    for (index, card) in cards.iter().enumerate() {
        if selected.next_if(|&&s| s == index).is_some() {
            keep.push(*card);
        } else {
            discard.push(*card);
        }
    }

    Partition {
        selection,
        keep,
        discard,
        score: Score::Unknown,
    }
}

/// Lists every keep/discard split of `hand` exactly as entered.
///
/// ```
/// use cribrs::{parse_hand, partitions};
///
/// let analysis = partitions(&parse_hand("AC 2C 3C 4C 5C 6C"));
/// assert_eq!(analysis.partitions().len(), 15);
/// ```
#[must_use]
pub fn partitions(hand: &DealtHand) -> Analysis {
    let cards = hand.cards();
    if cards.len() < KEEP_SIZE {
        return Analysis::NotEnoughCards {
            have: cards.len(),
            need: KEEP_SIZE,
        };
    }

    Analysis::Partitions(
        combinations(cards.len(), KEEP_SIZE)
            .into_iter()
            .map(|selection| split(cards, selection))
            .collect(),
    )
}

/// Applies `policy` to `hand` and lists its keep/discard splits.
///
/// With [`DuplicatePolicy::Collapse`] repeated cards are merged first, so
/// no two partitions look alike. Selections then index the collapsed hand.
#[must_use]
pub fn analyze(hand: &DealtHand, policy: DuplicatePolicy) -> Analysis {
    partitions(&policy.apply(hand))
}
