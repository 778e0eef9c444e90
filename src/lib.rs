//! Cribbage hand entry and keep/discard enumeration with optional `no_std`
//! support.
//!
//! A hand is entered either as free text ([`parse_hand`]) or one keystroke
//! at a time ([`entry::apply`]), and [`partitions`] lists every way to keep
//! four of its cards. The [`Analyst`] type holds the current hand and wires
//! both entry paths and the analysis together.
//!
//! # Example
//!
//! ```
//! use cribrs::{Analyst, AnalystOptions};
//!
//! let analyst = Analyst::new(AnalystOptions::default(), 42);
//! analyst.set_text("5h 5d 5s jc 6c");
//! assert_eq!(analyst.analysis().partitions().len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod analysis;
pub mod analyst;
pub mod card;
pub mod deck;
pub mod entry;
pub mod error;
pub mod hand;
pub mod options;
pub mod parser;
mod sync;

// Re-export main types
pub use analysis::{Analysis, KEEP_SIZE, Partition, Score, analyze, combinations, partitions};
pub use analyst::Analyst;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use entry::{EntryKey, KeyBus, KeyCode, KeyEvent, Slot, Step, Subscription};
pub use error::{CardParseError, DealError};
pub use hand::DealtHand;
pub use options::{AnalystOptions, DuplicatePolicy};
pub use parser::{Token, parse_hand, parse_hand_with, tokens};
