// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board texture classification.
use log::debug;

use overcall_cards::{Card, Rank};

use crate::pattern::{rank_counts, suit_counts};

/// Classifies the shape of the community cards.
///
/// Flush and straight redraws depend on the hole cards and are reported by
/// [HandStrength](crate::HandStrength), not by this trait.
pub trait BoardTexture {
    /// Updates the classifier with the current hole and board cards.
    fn update_board(&mut self, hole: &[Card], board: &[Card]);

    /// The board has few draws and is uncoordinated.
    fn is_dry_board(&self) -> bool;

    /// At least two board cards share a rank.
    fn is_paired_board(&self) -> bool;

    /// Three or more board cards share a suit.
    fn flush_possible(&self) -> bool;

    /// Three or more board cards fit into a five ranks window.
    fn straight_possible(&self) -> bool;
}

/// Board texture classifier computed from the board cards.
#[derive(Debug, Default, Clone)]
pub struct BoardTextureSymbols {
    board: Vec<Card>,
}

impl BoardTextureSymbols {
    /// Board with at least three cards of the same rank.
    pub fn is_trips_on_board(&self) -> bool {
        self.board.len() >= 3 && self.max_rank_count() >= 3
    }

    /// Board with two or more paired ranks.
    pub fn is_two_pair_on_board(&self) -> bool {
        self.board.len() >= 4 && self.paired_ranks() >= 2
    }

    /// Board with trips and another pair.
    pub fn is_full_house_on_board(&self) -> bool {
        self.board.len() >= 5 && self.is_trips_on_board() && self.paired_ranks() >= 2
    }

    /// Board with four cards of the same rank.
    pub fn is_quads_on_board(&self) -> bool {
        self.board.len() >= 4 && self.max_rank_count() >= 4
    }

    /// Number of five ranks windows that hold three or more board ranks.
    pub fn straight_possibilities(&self) -> usize {
        if self.board.len() < 3 {
            return 0;
        }

        // The ace plays both ends of the ladder.
        let mut values = self
            .board
            .iter()
            .map(|c| c.rank().value())
            .collect::<Vec<_>>();
        if values.contains(&Rank::Ace.value()) {
            values.push(1);
        }

        (1..=10)
            .filter(|&low| {
                (low..low + 5)
                    .filter(|value| values.contains(value))
                    .count()
                    >= 3
            })
            .count()
    }

    /// How connected the board ranks are, from 0 (spread) to 1 (consecutive).
    pub fn connectedness(&self) -> f64 {
        if self.board.len() < 2 {
            return 0.0;
        }

        let mut values = self
            .board
            .iter()
            .map(|c| c.rank().value())
            .collect::<Vec<_>>();
        values.sort_unstable();

        let gaps = values
            .windows(2)
            .map(|w| (w[1] - w[0]).saturating_sub(1).min(4) as f64)
            .sum::<f64>();
        let max_gaps = ((values.len() - 1) * 12) as f64;
        let connectedness = 1.0 - gaps / max_gaps;

        let broadway = self
            .board
            .iter()
            .filter(|c| c.rank() >= Rank::Ten)
            .count();
        if broadway >= 3 {
            connectedness.max(0.8)
        } else {
            connectedness
        }
    }

    /// Board danger level between 0 and 1.
    pub fn danger_level(&self) -> f64 {
        let mut danger = 0.0;

        if self.is_paired_board() {
            danger += 0.2;
        }

        if self.is_trips_on_board() {
            danger += 0.3;
        }

        if self.is_two_pair_on_board() {
            danger += 0.2;
        }

        if self.is_full_house_on_board() {
            danger += 0.4;
        }

        if self.is_quads_on_board() {
            danger += 0.5;
        }

        if self.flush_possible() {
            danger += 0.2;
        }

        if self.straight_possible() {
            danger += 0.2;
        }

        if self.straight_possibilities() > 1 {
            danger += 0.2;
        }

        danger += self.connectedness() * 0.2;

        f64::min(danger, 1.0)
    }

    /// The board has many draws and is coordinated.
    pub fn is_wet_board(&self) -> bool {
        self.danger_level() > 0.6
    }

    fn max_rank_count(&self) -> usize {
        rank_counts(&self.board).into_values().max().unwrap_or(0)
    }

    fn paired_ranks(&self) -> usize {
        rank_counts(&self.board)
            .into_values()
            .filter(|&n| n >= 2)
            .count()
    }
}

impl BoardTexture for BoardTextureSymbols {
    fn update_board(&mut self, _hole: &[Card], board: &[Card]) {
        self.board = board.to_vec();
        debug!(
            "Board {:?} danger level {:.2}",
            self.board,
            self.danger_level()
        );
    }

    fn is_dry_board(&self) -> bool {
        self.danger_level() < 0.3
    }

    fn is_paired_board(&self) -> bool {
        self.board.len() >= 2 && self.max_rank_count() >= 2
    }

    fn flush_possible(&self) -> bool {
        self.board.len() >= 3 && suit_counts(&self.board).into_values().any(|n| n >= 3)
    }

    fn straight_possible(&self) -> bool {
        self.straight_possibilities() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::cards;

    fn texture(board: &[&str]) -> BoardTextureSymbols {
        let mut texture = BoardTextureSymbols::default();
        texture.update_board(&cards(&["As", "Kd"]), &cards(board));
        texture
    }

    #[test]
    fn dry_boards() {
        for board in [&["Qh", "7d", "2c"], &["Kh", "7d", "2c"], &["Ah", "8d", "3c"]] {
            let t = texture(board);
            assert!(t.is_dry_board(), "{board:?} {}", t.danger_level());
            assert!(!t.is_wet_board());
        }

        // No board is dry.
        assert!(texture(&[]).is_dry_board());
    }

    #[test]
    fn wet_boards() {
        let t = texture(&["Qh", "Jd", "Tc"]);
        assert!(!t.is_dry_board());
        assert!(t.straight_possible());
        assert_eq!(t.straight_possibilities(), 3);

        let t = texture(&["9h", "8h", "7h"]);
        assert!(t.flush_possible());
        assert!(t.is_wet_board());
    }

    #[test]
    fn paired_boards() {
        let t = texture(&["Qh", "Qd", "2c"]);
        assert!(t.is_paired_board());
        assert!(!t.is_trips_on_board());
        assert!(!t.is_dry_board());

        let t = texture(&["Qh", "Qd", "2c", "2d"]);
        assert!(t.is_two_pair_on_board());

        let t = texture(&["Qh", "Qd", "Qc", "2d", "2c"]);
        assert!(t.is_trips_on_board());
        assert!(t.is_full_house_on_board());
        assert!(!t.is_quads_on_board());

        let t = texture(&["Qh", "Qd", "Qc", "Qs"]);
        assert!(t.is_quads_on_board());
        assert_eq!(t.danger_level(), 1.0);

        assert!(!texture(&["Qh", "7d", "2c"]).is_paired_board());
    }

    #[test]
    fn flush_possible() {
        assert!(texture(&["Qh", "Jh", "Th"]).flush_possible());
        assert!(texture(&["Qh", "Jh", "2c", "5h"]).flush_possible());
        assert!(!texture(&["Qh", "Jh", "2c"]).flush_possible());
    }

    #[test]
    fn straight_possible() {
        // Wheel window with the ace playing low.
        assert!(texture(&["Ah", "2d", "4c"]).straight_possible());
        assert!(texture(&["Ah", "Kd", "Qc"]).straight_possible());
        assert!(texture(&["9h", "7d", "5c"]).straight_possible());
        assert!(!texture(&["Qh", "7d", "2c"]).straight_possible());
        assert!(!texture(&["Qh", "Jd"]).straight_possible());
    }

    #[test]
    fn connectedness() {
        assert_eq!(texture(&["Qh"]).connectedness(), 0.0);

        let t = texture(&["9h", "8d", "7c"]);
        assert_eq!(t.connectedness(), 1.0);

        let t = texture(&["Qh", "7d", "2c"]);
        assert!((t.connectedness() - (1.0 - 8.0 / 24.0)).abs() < 1e-9);

        let t = texture(&["Ah", "Kd", "2c"]);
        let spread = texture(&["Ah", "Td", "2c"]);
        assert!(t.connectedness() > spread.connectedness());

        // Broadway cards count as connected.
        let t = texture(&["Ah", "Qd", "Tc"]);
        assert!(t.connectedness() >= 0.8);
    }
}
