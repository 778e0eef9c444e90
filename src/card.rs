//! Card types and string mappings.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card rank, ordered Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the canonical one-character string for the rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Maps a single rank character, case-insensitively.
    ///
    /// `1` and `0` are accepted as Ten so that both halves of a typed `10`
    /// resolve to the same rank.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'A' => Self::Ace,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' | '1' | '0' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        })
    }

    /// Maps a rank token such as `"a"`, `"T"` or `"10"`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Self::Ten);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card suit, ordered Clubs, Diamonds, Hearts, Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the canonical glyph for the suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Maps a suit glyph. The outline glyphs `♧ ♢ ♡ ♤` are aliases.
    #[must_use]
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '♣' | '♧' => Some(Self::Clubs),
            '♦' | '♢' => Some(Self::Diamonds),
            '♥' | '♡' => Some(Self::Hearts),
            '♠' | '♤' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Maps a suit letter (`C`, `D`, `H`, `S`), case-insensitively.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Maps either a suit letter or a glyph.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match Self::from_glyph(c) {
            Some(suit) => Some(suit),
            None => Self::from_letter(c),
        }
    }

    /// Maps a one-character suit token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card whose rank and suit may each still be unknown.
///
/// Partially specified cards appear while a hand is being typed in, and a
/// card with neither field set stands in for "no card yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    /// The rank, if known.
    pub rank: Option<Rank>,
    /// The suit, if known.
    pub suit: Option<Suit>,
}

impl Card {
    /// The placeholder card with neither rank nor suit.
    pub const BLANK: Self = Self {
        rank: None,
        suit: None,
    };

    /// Creates a card from optional parts.
    #[must_use]
    pub const fn new(rank: Option<Rank>, suit: Option<Suit>) -> Self {
        Self { rank, suit }
    }

    /// Creates a fully specified card.
    #[must_use]
    pub const fn complete(rank: Rank, suit: Suit) -> Self {
        Self::new(Some(rank), Some(suit))
    }

    /// Creates a card with a rank and no suit.
    #[must_use]
    pub const fn rank_only(rank: Rank) -> Self {
        Self::new(Some(rank), None)
    }

    /// Creates a card with a suit and no rank.
    #[must_use]
    pub const fn suit_only(suit: Suit) -> Self {
        Self::new(None, Some(suit))
    }

    /// Returns whether both rank and suit are known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.rank.is_some() && self.suit.is_some()
    }

    /// Returns whether neither rank nor suit is known.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.rank.is_none() && self.suit.is_none()
    }

    /// Returns a copy with the given rank.
    #[must_use]
    pub const fn with_rank(self, rank: Rank) -> Self {
        Self::new(Some(rank), self.suit)
    }

    /// Returns a copy with the given suit.
    #[must_use]
    pub const fn with_suit(self, suit: Suit) -> Self {
        Self::new(self.rank, Some(suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => f.write_str(rank.as_str())?,
            None => f.write_str("?")?,
        }
        if let Some(suit) = self.suit {
            write!(f, "{}", suit.glyph())?;
        }
        Ok(())
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CardParseError::Empty);
        }
        Self::from_token(s).ok_or(CardParseError::InvalidRank)
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CardParseError::Empty);
        }
        Self::from_token(s).ok_or(CardParseError::InvalidSuit)
    }
}

/// Strict single-card parsing, accepting every form [`Card`] displays as
/// (`"A♣"`, `"5"`, `"?♥"`, `"?"`) plus suit letters and `10`.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, rest) = if let Some(rest) = s.strip_prefix('?') {
            (None, rest)
        } else if let Some(rest) = s.strip_prefix("10") {
            (Some(Rank::Ten), rest)
        } else {
            let mut chars = s.chars();
            let first = chars.next().ok_or(CardParseError::Empty)?;
            let rank = Rank::from_char(first).ok_or(CardParseError::InvalidRank)?;
            (Some(rank), chars.as_str())
        };

        let mut chars = rest.chars();
        let suit = match chars.next() {
            None => None,
            Some(c) => Some(Suit::from_char(c).ok_or(CardParseError::InvalidSuit)?),
        };
        if !chars.as_str().is_empty() {
            return Err(CardParseError::TrailingInput);
        }

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
