//! Analyst configuration options.

use crate::hand::DealtHand;

/// How repeated cards in a hand are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Collapse equal cards, keeping the first occurrence.
    #[default]
    Collapse,
    /// Keep every card as entered.
    Keep,
}

impl DuplicatePolicy {
    /// Applies the policy to a hand, returning the resulting hand.
    #[must_use]
    pub fn apply(self, hand: &DealtHand) -> DealtHand {
        match self {
            Self::Collapse => hand.deduplicated(),
            Self::Keep => hand.clone(),
        }
    }
}

/// Configuration options for an [`Analyst`](crate::Analyst).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{AnalystOptions, DuplicatePolicy};
///
/// let options = AnalystOptions::default()
///     .with_duplicates(DuplicatePolicy::Keep)
///     .with_deal_size(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalystOptions {
    /// Treatment of repeated cards in typed text and before enumeration.
    ///
    /// Keystroke entry is never deduplicated: a repeated keystroke is the
    /// user's own edit and stays visible until deleted.
    pub duplicates: DuplicatePolicy,
    /// Number of cards dealt by [`Analyst::deal`](crate::Analyst::deal).
    pub deal_size: u8,
}

impl Default for AnalystOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Collapse,
            deal_size: 6,
        }
    }
}

impl AnalystOptions {
    /// Sets the duplicate policy.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{AnalystOptions, DuplicatePolicy};
    ///
    /// let options = AnalystOptions::default().with_duplicates(DuplicatePolicy::Keep);
    /// assert_eq!(options.duplicates, DuplicatePolicy::Keep);
    /// ```
    #[must_use]
    pub const fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Sets the number of cards dealt at random.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::AnalystOptions;
    ///
    /// let options = AnalystOptions::default().with_deal_size(5);
    /// assert_eq!(options.deal_size, 5);
    /// ```
    #[must_use]
    pub const fn with_deal_size(mut self, deal_size: u8) -> Self {
        self.deal_size = deal_size;
        self
    }
}
