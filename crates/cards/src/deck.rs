// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a card text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The rank character is not one of `23456789TJQKA`.
    #[error("Invalid rank: {0}")]
    Rank(char),
    /// The suit character is not one of `hdcs`.
    #[error("Invalid suit: {0}")]
    Suit(char),
    /// The text is not a two characters `<rank><suit>` code.
    #[error("Invalid card: {0:?}")]
    Format(String),
}

/// A Poker card.
///
/// Cards are plain `(rank, suit)` values and compare by both fields. The text
/// form is a rank character followed by a suit character, for example `Ah` for
/// the ace of hearts or `Td` for the ten of diamonds.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// Parses a two characters card code like `Ah`, `Td` or `2c`.
pub fn parse_card(text: &str) -> Result<Card, InvalidCard> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(rank), Some(suit), None) => {
            let rank = Rank::try_from(rank)?;
            let suit = Suit::try_from(suit)?;
            Ok(Card::new(rank, suit))
        }
        _ => Err(InvalidCard::Format(text.to_string())),
    }
}

impl FromStr for Card {
    type Err = InvalidCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank, the discriminant is the rank value on the 2-14 ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, deuce is 2 and ace is 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given value if it is in the 2-14 range.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Returns the next higher rank, `None` for the ace.
    pub fn next(&self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }
}

impl TryFrom<char> for Rank {
    type Error = InvalidCard;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(InvalidCard::Rank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl TryFrom<char> for Suit {
    type Error = InvalidCard;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(InvalidCard::Suit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn parse_all_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            let parsed = parse_card(&card.to_string()).unwrap();
            assert_eq!(parsed, card);
            cards.insert(parsed);
        }

        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn parse_card_codes() {
        let c = parse_card("Ah").unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(c.rank().value(), 14);

        let c = parse_card("Td").unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(c.rank().value(), 10);

        let c = "2c".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(c.rank().value(), 2);

        // Rank is upper cased and suit lower cased before matching.
        assert_eq!(parse_card("kS").unwrap(), Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn parse_invalid_cards() {
        assert_eq!(parse_card("Ax"), Err(InvalidCard::Suit('x')));
        assert_eq!(parse_card("1h"), Err(InvalidCard::Rank('1')));
        assert_eq!(parse_card("Xh"), Err(InvalidCard::Rank('X')));
        assert_eq!(parse_card(""), Err(InvalidCard::Format(String::new())));
        assert_eq!(parse_card("A"), Err(InvalidCard::Format("A".to_string())));
        assert_eq!(parse_card("10h"), Err(InvalidCard::Format("10h".to_string())));

        let err = parse_card("Az").unwrap_err();
        assert_eq!(err.to_string(), "Invalid suit: z");
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");
        assert_eq!(format!("{c:?}"), "Card(Th)");
    }

    #[test]
    fn rank_ladder() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);

        assert_eq!(Rank::King.next(), Some(Rank::Ace));
        assert_eq!(Rank::Ace.next(), None);
        assert!(Rank::Ace > Rank::King);
    }

    #[test]
    fn deck_default() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
        assert!(cards.contains(&Card::new(Rank::Deuce, Suit::Clubs)));
    }

    #[test]
    fn deck_deal_all() {
        let mut deck = Deck::default();
        for _ in 0..Deck::SIZE {
            assert!(deck.deal().is_some());
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }
}
