// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs and equity estimation.
use log::debug;

use overcall_cards::{Card, InvalidCard, Rank, Street, Suit, parse_card};

use crate::{
    Config,
    board::{BoardTexture, BoardTextureSymbols},
    breakdown::OutsBreakdown,
    hand::{HandStrength, HandStrengthSymbols},
    pattern::{highest_rank, longest_run, rank_counts, suit_counts, unique_ranks},
};

/// Outs for a flush draw that cannot be beaten by a higher flush.
const NUT_FLUSH_OUTS: f64 = 9.0;
/// Outs for a flush draw with a higher flush live.
const FLUSH_OUTS: f64 = 8.0;
/// Outs for an open ended or double gutshot straight draw.
const OPEN_ENDED_OUTS: f64 = 8.0;
/// Outs for an inside straight draw.
const GUTSHOT_OUTS: f64 = 4.0;

/// Estimates outs and equity for a player hand.
///
/// The calculator owns a [BoardTexture] and a [HandStrength] classifier that
/// are kept in sync with the cards on every [update_cards](Self::update_cards),
/// queries are computed from the current cards and never change the state.
#[derive(Debug)]
pub struct OutsCalculator<B = BoardTextureSymbols, H = HandStrengthSymbols> {
    hole: Vec<Card>,
    board: Vec<Card>,
    street: Street,
    board_texture: B,
    hand_strength: H,
    config: Config,
}

impl OutsCalculator {
    /// Creates a calculator with the default classifiers.
    pub fn new() -> Self {
        Self::with_classifiers(BoardTextureSymbols::default(), HandStrengthSymbols::default())
    }
}

impl Default for OutsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, H> OutsCalculator<B, H>
where
    B: BoardTexture + Default,
    H: HandStrength + Default,
{
    /// Clears the cards, goes back to preflop and replaces the classifiers.
    pub fn reset(&mut self) {
        self.hole.clear();
        self.board.clear();
        self.street = Street::Preflop;
        self.board_texture = B::default();
        self.hand_strength = H::default();
    }
}

impl<B: BoardTexture, H: HandStrength> OutsCalculator<B, H> {
    /// Creates a calculator that uses the given classifiers.
    pub fn with_classifiers(board_texture: B, hand_strength: H) -> Self {
        Self {
            hole: Vec::new(),
            board: Vec::new(),
            street: Street::Preflop,
            board_texture,
            hand_strength,
            config: Config::default(),
        }
    }

    /// Sets the equity conversion model.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Updates cards and street and forwards them to the classifiers.
    ///
    /// All cards are parsed before changing any state, if a card is invalid
    /// the calculator keeps its previous cards.
    pub fn update_cards<S: AsRef<str>>(
        &mut self,
        hole: &[S],
        board: &[S],
        street: Street,
    ) -> Result<(), InvalidCard> {
        let hole = parse_cards(hole)?;
        let board = parse_cards(board)?;

        self.hole = hole;
        self.board = board;
        self.street = street;

        self.board_texture.update_board(&self.hole, &self.board);
        self.hand_strength
            .update_cards(&self.hole, &self.board, self.street);

        debug!(
            "Updated {} hole {:?} board {:?}",
            self.street, self.hole, self.board
        );

        Ok(())
    }

    /// The player hole cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// The board cards.
    pub fn board_cards(&self) -> &[Card] {
        &self.board
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// Total outs for the current street, zero preflop and on the river.
    pub fn calculate_total_outs(&self) -> f64 {
        match self.street {
            Street::Preflop | Street::River => 0.0,
            Street::Flop => self.calculate_flop_outs(),
            Street::Turn => self.calculate_turn_outs(),
        }
    }

    /// Outs with two cards to come, backdoor draws included.
    pub fn calculate_flop_outs(&self) -> f64 {
        self.draws(true).total()
    }

    /// Outs with one card to come.
    pub fn calculate_turn_outs(&self) -> f64 {
        self.draws(false).total()
    }

    /// Converts outs to equity with the rule of 4 on the flop and the rule of 2
    /// on the turn.
    pub fn calculate_equity_from_outs(&self) -> f64 {
        self.config.equity(self.street, self.calculate_total_outs())
    }

    /// Describes the outs terms, or `No outs` if there are none.
    pub fn get_outs_description(&self) -> String {
        self.breakdown().to_string()
    }

    /// The outs terms for the current street.
    pub fn breakdown(&self) -> OutsBreakdown {
        match self.street {
            Street::Preflop | Street::River => OutsBreakdown::default(),
            Street::Flop => self.draws(true),
            Street::Turn => self.draws(false),
        }
    }

    fn draws(&self, with_backdoor: bool) -> OutsBreakdown {
        let breakdown = OutsBreakdown {
            made_hand: self.made_hand_improvement_outs(),
            flush: self.flush_draw_outs(),
            straight: self.straight_draw_outs(),
            overcard: self.overcard_outs(),
            backdoor: if with_backdoor {
                self.backdoor_draw_outs()
            } else {
                0.0
            },
            discount: self.outs_discount(),
        };

        debug!("{} outs {breakdown:?}", self.street);
        breakdown
    }

    /// Outs to improve a set redraw or a top or second pair.
    pub fn made_hand_improvement_outs(&self) -> f64 {
        let mut outs = 0.0;

        if self.hand_strength.have_set_redraw() {
            outs += 2.0;
        }

        if self.hand_strength.have_top_pair() || self.hand_strength.have_second_top_pair() {
            let matches = self
                .hole
                .iter()
                .flat_map(|h| self.board.iter().filter(move |b| b.rank() == h.rank()))
                .count();
            if matches >= 1 {
                outs += 1.0;
            }

            // A board card our hole cards don't pair.
            let live_kicker = self
                .board
                .iter()
                .any(|b| self.hole.iter().all(|h| h.rank() != b.rank()));
            if live_kicker {
                outs += 3.0;
            }
        }

        outs
    }

    /// Outs to complete a four cards flush draw.
    pub fn flush_draw_outs(&self) -> f64 {
        if self.hole.len() != 2 || self.board.len() < 3 {
            return 0.0;
        }

        // A made flush is not a draw.
        let counts = suit_counts(self.hole.iter().chain(&self.board));
        let Some(suit) = Suit::suits().find(|s| counts.get(s) == Some(&4)) else {
            return 0.0;
        };

        let high = highest_rank(self.hole.iter().filter(|c| c.suit() == suit));
        match high {
            Some(rank) if rank.next().is_some() => FLUSH_OUTS,
            _ => NUT_FLUSH_OUTS,
        }
    }

    /// Outs to complete an open ended, double gutshot or gutshot draw.
    pub fn straight_draw_outs(&self) -> f64 {
        if self.hole.len() != 2 || self.board.len() < 3 {
            return 0.0;
        }

        let ranks = unique_ranks(self.hole.iter().chain(&self.board));
        match longest_run(&ranks) {
            5.. => return 0.0,
            4 => return OPEN_ENDED_OUTS,
            _ => {}
        }

        let ace = ranks.last() == Some(&Rank::Ace.value());
        let deuce = Rank::Deuce.value();

        // The first one rank gap decides the draw, wider gaps are not draws.
        for (idx, w) in ranks.windows(2).enumerate() {
            let (low, high) = (w[0], w[1]);
            if high - low != 2 {
                continue;
            }

            if high == Rank::Ace.value() || (low == deuce && ace) {
                return 0.0;
            }

            let double = ranks.get(idx + 2).is_some_and(|&next| next - high == 2);
            return if double { OPEN_ENDED_OUTS } else { GUTSHOT_OUTS };
        }

        0.0
    }

    /// Outs to pair one or two hole cards above the board.
    pub fn overcard_outs(&self) -> f64 {
        let Some(top) = highest_rank(&self.board).filter(|_| self.board.len() >= 3) else {
            return 0.0;
        };

        let overcards = self.hole.iter().filter(|c| c.rank() > top).count();
        let pocket_pair = matches!(self.hole.as_slice(), [c1, c2] if c1.rank() == c2.rank());
        if overcards == 0 || pocket_pair {
            return 0.0;
        }

        match (self.board_texture.is_dry_board(), overcards) {
            (true, 1) => 3.0,
            (true, _) => 5.0,
            (false, 1) => 2.0,
            (false, _) => 1.0,
        }
    }

    /// Fractional outs for runner-runner flush and straight draws on the flop.
    pub fn backdoor_draw_outs(&self) -> f64 {
        if self.street != Street::Flop || self.hole.len() != 2 || self.board.len() < 3 {
            return 0.0;
        }

        let mut outs = 0.0;

        let counts = suit_counts(self.hole.iter().chain(&self.board));
        let backdoor_suit = Suit::suits().find(|s| {
            counts.get(s) == Some(&3) && self.hole.iter().any(|c| c.suit() == *s)
        });
        if let Some(suit) = backdoor_suit {
            // The highest rank of the suit that is not on the board.
            let live = Rank::ranks()
                .rev()
                .find(|&r| !self.board.contains(&Card::new(r, suit)));
            let nut = self
                .hole
                .iter()
                .any(|c| c.suit() == suit && Some(c.rank()) == live);
            outs += if nut { 1.5 } else { 1.0 };
        }

        let ranks = unique_ranks(self.hole.iter().chain(&self.board));
        let hole_ranks = self.hole.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
        let window = ranks.windows(2).find(|w| {
            w[1] - w[0] <= 2 && hole_ranks.iter().all(|&r| r + 1 >= w[0] && r <= w[1] + 1)
        });
        if let Some(w) = window {
            let board_top = highest_rank(&self.board).map_or(0, |r| r.value());
            outs += if w[1] <= board_top { 1.5 } else { 1.0 };
        }

        outs
    }

    /// Outs removed for paired, flush possible and straight possible boards.
    pub fn outs_discount(&self) -> f64 {
        let mut discount = 0.0;

        if self.board_texture.is_paired_board() {
            let pairs = rank_counts(&self.board)
                .into_values()
                .filter(|&n| n >= 2)
                .count();
            discount += match pairs {
                0 => 0.0,
                1 => 2.5,
                _ => 5.0,
            };
        }

        if self.board_texture.flush_possible() && !self.hand_strength.have_flush_redraw() {
            discount += 2.0;
        }

        if self.board_texture.straight_possible() && !self.hand_strength.have_straight_redraw() {
            discount += 2.0;
        }

        discount
    }
}

fn parse_cards<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Card>, InvalidCard> {
    texts.iter().map(|t| parse_card(t.as_ref())).collect()
}
