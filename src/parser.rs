//! Free-text hand specifier parsing (e.g. `"AC 5d th"` -> `[A♣, 5♦, T♥]`).
//!
//! # Format
//! A card is a rank token optionally followed directly by a suit token.
//! - Ranks: `A`, `2`-`9`, `10`, `1`, `T`, `J`, `Q`, `K` (`1` and `10` mean Ten)
//! - Suits: `C`, `D`, `H`, `S` or a suit glyph (`♣ ♦ ♥ ♠`, outline forms too)
//!
//! Matching is case-insensitive and everything between matches is ignored,
//! so parsing never fails. Text without any match yields the empty hand.

use core::ops::Range;

use crate::card::{Card, Rank, Suit};
use crate::hand::DealtHand;
use crate::options::DuplicatePolicy;

/// A recognized card within the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the match in the input.
    pub range: Range<usize>,
    /// The card the match denotes.
    pub card: Card,
}

/// Iterator over the non-overlapping card matches of a string, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

/// Returns an iterator over every card match in `input`.
#[must_use]
pub const fn tokens(input: &str) -> Tokens<'_> {
    Tokens { input, pos: 0 }
}

fn match_rank(rest: &str) -> Option<(Rank, usize)> {
    if rest.starts_with("10") {
        return Some((Rank::Ten, 2));
    }
    match rest.chars().next()? {
        // a lone zero is a keyboard alias only
        '0' => None,
        c => Rank::from_char(c).map(|rank| (rank, c.len_utf8())),
    }
}

fn match_suit(rest: &str) -> Option<(Suit, usize)> {
    let c = rest.chars().next()?;
    Suit::from_char(c).map(|suit| (suit, c.len_utf8()))
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rest) = self.input.get(self.pos..).filter(|rest| !rest.is_empty()) {
            let start = self.pos;
            if let Some((rank, rank_len)) = match_rank(rest) {
                let (suit, suit_len) =
                    match_suit(&rest[rank_len..]).map_or((None, 0), |(s, len)| (Some(s), len));
                self.pos = start + rank_len + suit_len;
                return Some(Token {
                    range: start..self.pos,
                    card: Card::new(Some(rank), suit),
                });
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Parses a hand specifier, keeping duplicate cards.
///
/// ```
/// use cribrs::{Card, Rank, Suit, parse_hand};
///
/// let hand = parse_hand("AC, 10h; 5 !");
/// assert_eq!(
///     hand.cards(),
///     &[
///         Card::complete(Rank::Ace, Suit::Clubs),
///         Card::complete(Rank::Ten, Suit::Hearts),
///         Card::rank_only(Rank::Five),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_hand(input: &str) -> DealtHand {
    tokens(input).map(|token| token.card).collect()
}

/// Parses a hand specifier and applies `policy` to repeated cards.
#[must_use]
pub fn parse_hand_with(input: &str, policy: DuplicatePolicy) -> DealtHand {
    policy.apply(&parse_hand(input))
}
