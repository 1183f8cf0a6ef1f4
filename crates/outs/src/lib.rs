// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Overcall Poker outs and equity estimation.
//!
//! The [OutsCalculator] estimates how many unseen cards improve a player hand
//! on the flop and on the turn, and converts them to an approximate winning
//! probability with the rule of 4 and the rule of 2:
//!
//! ```
//! # use overcall_outs::*;
//! let mut calc = OutsCalculator::new();
//! calc.update_cards(&["Ah", "Kh"], &["2h", "7h", "9c"], Street::Flop)
//!     .unwrap();
//!
//! // Nut flush draw plus two overcards.
//! assert_eq!(calc.flush_draw_outs(), 9.0);
//! assert!(calc.calculate_total_outs() >= 9.0);
//! assert!(calc.calculate_equity_from_outs() <= 0.95);
//!
//! println!("{}", calc.get_outs_description());
//! ```
//!
//! The calculator depends on a [BoardTexture] and a [HandStrength] classifier,
//! the defaults classify the cards directly but any implementation can be
//! plugged in with [OutsCalculator::with_classifiers], for example to pin the
//! classification signals in tests.
//!
//! There are no outs preflop and on the river:
//!
//! ```
//! # use overcall_outs::*;
//! let mut calc = OutsCalculator::new();
//! calc.update_cards(&["Ah", "Kh"], &["2h", "7h", "9c", "3d", "Qs"], Street::River)
//!     .unwrap();
//! assert_eq!(calc.calculate_total_outs(), 0.0);
//! assert_eq!(calc.get_outs_description(), "No outs");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod board;
pub use board::{BoardTexture, BoardTextureSymbols};

mod breakdown;
pub use breakdown::OutsBreakdown;

mod calculator;
pub use calculator::OutsCalculator;

mod hand;
pub use hand::{HandStrength, HandStrengthSymbols};

mod pattern;

// Reexport cards types.
pub use overcall_cards::{Card, InvalidCard, Rank, Street, Suit, parse_card};

/// Outs to equity conversion model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Equity per out with two cards to come.
    pub flop_equity_per_out: f64,
    /// Maximum equity on the flop.
    pub flop_equity_cap: f64,
    /// Equity per out with one card to come.
    pub turn_equity_per_out: f64,
    /// Maximum equity on the turn.
    pub turn_equity_cap: f64,
}

impl Config {
    /// Converts outs to equity for the given street, zero preflop and on the
    /// river.
    pub fn equity(&self, street: Street, outs: f64) -> f64 {
        match street {
            Street::Flop => f64::min(outs * self.flop_equity_per_out, self.flop_equity_cap),
            Street::Turn => f64::min(outs * self.turn_equity_per_out, self.turn_equity_cap),
            Street::Preflop | Street::River => 0.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flop_equity_per_out: 0.04,
            flop_equity_cap: 0.95,
            turn_equity_per_out: 0.02,
            turn_equity_cap: 0.98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTS: [f64; 10] = [0.0, 2.0, 5.0, 9.0, 15.0, 23.0, 24.0, 30.0, 50.0, 60.0];

    #[test]
    fn equity_does_not_decrease_with_outs() {
        let config = Config::default();
        for street in Street::streets() {
            let equity = OUTS.map(|outs| config.equity(street, outs));
            assert!(equity.windows(2).all(|w| w[0] <= w[1]), "{street}: {equity:?}");
        }
    }

    #[test]
    fn equity_default_caps() {
        let config = Config::default();

        assert!((config.equity(Street::Flop, 23.0) - 0.92).abs() < 1e-9);
        assert_eq!(config.equity(Street::Flop, 24.0), 0.95);
        assert_eq!(config.equity(Street::Flop, 30.0), 0.95);

        assert!((config.equity(Street::Turn, 30.0) - 0.6).abs() < 1e-9);
        assert_eq!(config.equity(Street::Turn, 50.0), 0.98);
        assert_eq!(config.equity(Street::Turn, 60.0), 0.98);

        assert_eq!(config.equity(Street::Preflop, 30.0), 0.0);
        assert_eq!(config.equity(Street::River, 30.0), 0.0);
    }
}
