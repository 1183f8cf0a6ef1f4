// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Overcall Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use overcall_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! to parse them from their two characters text code:
//!
//! ```
//! # use overcall_cards::{Card, InvalidCard, Rank, Suit, parse_card};
//! let td = parse_card("Td").unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.rank().value(), 10);
//!
//! assert_eq!(parse_card("Tx"), Err(InvalidCard::Suit('x')));
//! ```
//!
//! the [Street] a hand is on, and a [Deck] type for shuffling and dealing
//! cards:
//!
//! ```
//! # use overcall_cards::{Deck, Street};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let flop = (0..Street::Flop.board_len())
//!     .filter_map(|_| deck.deal())
//!     .collect::<Vec<_>>();
//! assert_eq!(Street::from_board_len(flop.len()), Some(Street::Flop));
//! assert_eq!(deck.count(), Deck::SIZE - 3);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, InvalidCard, Rank, Suit, parse_card};

mod street;
pub use street::Street;
