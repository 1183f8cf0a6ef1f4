// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Made hand classification relative to the board.
use log::debug;

use overcall_cards::{Card, Rank, Street};

use crate::pattern::{longest_run, suit_counts, unique_ranks};

/// Classifies the player made hand and its redraws.
pub trait HandStrength {
    /// Updates the classifier with the current cards and street.
    fn update_cards(&mut self, hole: &[Card], board: &[Card], street: Street);

    /// A pocket pair that can still improve to a set.
    fn have_set_redraw(&self) -> bool;

    /// A hole card pairs the highest board card.
    fn have_top_pair(&self) -> bool;

    /// A hole card pairs the second highest board card.
    fn have_second_top_pair(&self) -> bool;

    /// A made pair together with a four cards flush draw.
    fn have_flush_redraw(&self) -> bool;

    /// A made pair together with a straight draw.
    fn have_straight_redraw(&self) -> bool;
}

/// Hand strength classifier computed from the hole and board cards.
#[derive(Debug, Default, Clone)]
pub struct HandStrengthSymbols {
    hole: Vec<Card>,
    board: Vec<Card>,
}

impl HandStrengthSymbols {
    /// A pocket pair higher than every board card.
    pub fn have_overpair(&self) -> bool {
        self.pocket_pair()
            .zip(self.board_rank(0))
            .is_some_and(|(pair, top)| pair > top)
    }

    /// A hole card pairs the third highest board card.
    pub fn have_third_top_pair(&self) -> bool {
        self.pairs_board_rank(2)
    }

    /// Overpair or one of the top three pairs.
    pub fn have_pair(&self) -> bool {
        self.have_overpair()
            || self.have_top_pair()
            || self.have_second_top_pair()
            || self.have_third_top_pair()
    }

    fn ready(&self) -> bool {
        self.hole.len() == 2 && !self.board.is_empty()
    }

    fn pocket_pair(&self) -> Option<Rank> {
        match self.hole.as_slice() {
            [c1, c2] if c1.rank() == c2.rank() => Some(c1.rank()),
            _ => None,
        }
    }

    /// The nth highest board rank, duplicates included.
    fn board_rank(&self, nth: usize) -> Option<Rank> {
        let mut ranks = self.board.iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.get(nth).copied()
    }

    fn pairs_board_rank(&self, nth: usize) -> bool {
        if !self.ready() {
            return false;
        }

        self.board_rank(nth)
            .is_some_and(|rank| self.hole.iter().any(|c| c.rank() == rank))
    }
}

impl HandStrength for HandStrengthSymbols {
    fn update_cards(&mut self, hole: &[Card], board: &[Card], street: Street) {
        self.hole = hole.to_vec();
        self.board = board.to_vec();
        debug!(
            "Hand {:?} on {street} board {:?} pair {}",
            self.hole,
            self.board,
            self.have_pair()
        );
    }

    fn have_set_redraw(&self) -> bool {
        if !self.ready() {
            return false;
        }

        self.pocket_pair()
            .is_some_and(|pair| self.board.iter().all(|c| c.rank() != pair))
    }

    fn have_top_pair(&self) -> bool {
        self.pairs_board_rank(0)
    }

    fn have_second_top_pair(&self) -> bool {
        self.pairs_board_rank(1)
    }

    fn have_flush_redraw(&self) -> bool {
        if !self.ready() || !self.have_pair() {
            return false;
        }

        let counts = suit_counts(self.hole.iter().chain(&self.board));
        counts.into_values().max() == Some(4)
    }

    fn have_straight_redraw(&self) -> bool {
        if !self.ready() || !self.have_pair() {
            return false;
        }

        let ranks = unique_ranks(self.hole.iter().chain(&self.board));
        longest_run(&ranks) >= 4 || ranks.windows(3).any(|w| w[2] - w[0] == 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::cards;

    fn strength(hole: &[&str], board: &[&str]) -> HandStrengthSymbols {
        let board = cards(board);
        let street = Street::from_board_len(board.len()).unwrap();
        let mut strength = HandStrengthSymbols::default();
        strength.update_cards(&cards(hole), &board, street);
        strength
    }

    #[test]
    fn pairs() {
        let s = strength(&["Ah", "Kd"], &["Ad", "Qh", "2c"]);
        assert!(s.have_top_pair());
        assert!(!s.have_second_top_pair());
        assert!(s.have_pair());

        let s = strength(&["Qs", "Jd"], &["Ad", "Qh", "2c"]);
        assert!(!s.have_top_pair());
        assert!(s.have_second_top_pair());

        let s = strength(&["2s", "Jd"], &["Ad", "Qh", "2c"]);
        assert!(s.have_third_top_pair());
        assert!(!s.have_second_top_pair());

        let s = strength(&["Jh", "Td"], &["Ah", "Kd", "Qc"]);
        assert!(!s.have_pair());
    }

    #[test]
    fn overpair_and_set_redraw() {
        let s = strength(&["Ah", "Ad"], &["Kh", "Qd", "2c"]);
        assert!(s.have_overpair());
        assert!(s.have_set_redraw());

        let s = strength(&["7s", "7d"], &["2h", "7h", "9c"]);
        assert!(!s.have_overpair());
        assert!(!s.have_set_redraw());

        let s = strength(&["7s", "7d"], &["2h", "8h", "9c"]);
        assert!(s.have_set_redraw());
        assert!(!s.have_pair());

        // No redraws before the flop.
        let s = strength(&["7s", "7d"], &[]);
        assert!(!s.have_set_redraw());
    }

    #[test]
    fn flush_redraw() {
        let s = strength(&["Ah", "Kh"], &["Ad", "7h", "2h"]);
        assert!(s.have_flush_redraw());

        // Four to a flush without a pair.
        let s = strength(&["Ah", "Kh"], &["Qh", "7h", "2d"]);
        assert!(!s.have_flush_redraw());

        let s = strength(&["Ah", "Kd"], &["Ad", "7h", "2h"]);
        assert!(!s.have_flush_redraw());
    }

    #[test]
    fn straight_redraw() {
        // Top pair with an open ended draw.
        let s = strength(&["Jh", "Td"], &["Jc", "9d", "8c"]);
        assert!(s.have_straight_redraw());

        // Top pair with a gutshot.
        let s = strength(&["Jh", "9d"], &["Jc", "8d", "2c"]);
        assert!(s.have_straight_redraw());

        let s = strength(&["Ah", "Kd"], &["Ad", "7h", "2h"]);
        assert!(!s.have_straight_redraw());
    }
}
