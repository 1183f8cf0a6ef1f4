// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting streets.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A betting street, ordered by hand progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// No board cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Returns all streets in dealing order.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// Number of board cards dealt on this street.
    pub const fn board_len(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Returns the street for a board with `len` cards.
    pub fn from_board_len(len: usize) -> Option<Street> {
        Street::streets().find(|s| s.board_len() == len)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_board_len() {
        for street in Street::streets() {
            assert_eq!(Street::from_board_len(street.board_len()), Some(street));
        }

        assert_eq!(Street::from_board_len(1), None);
        assert_eq!(Street::from_board_len(6), None);
    }

    #[test]
    fn street_order() {
        assert!(Street::Preflop < Street::Flop);
        assert!(Street::Flop < Street::Turn);
        assert!(Street::Turn < Street::River);
        assert_eq!(Street::Turn.to_string(), "turn");
    }
}
