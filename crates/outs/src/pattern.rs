// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit patterns shared by the classifiers and the outs engine.
use ahash::AHashMap;

use overcall_cards::{Card, Rank, Suit};

/// Counts cards by suit.
pub(crate) fn suit_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> AHashMap<Suit, usize> {
    let mut counts = AHashMap::with_capacity(4);
    for card in cards {
        *counts.entry(card.suit()).or_insert(0) += 1;
    }
    counts
}

/// Counts cards by rank.
pub(crate) fn rank_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> AHashMap<Rank, usize> {
    let mut counts = AHashMap::with_capacity(7);
    for card in cards {
        *counts.entry(card.rank()).or_insert(0) += 1;
    }
    counts
}

/// Sorted unique rank values.
pub(crate) fn unique_ranks<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<u8> {
    let mut ranks = cards
        .into_iter()
        .map(|c| c.rank().value())
        .collect::<Vec<_>>();
    ranks.sort_unstable();
    ranks.dedup();
    ranks
}

/// Length of the longest run of consecutive values in a sorted unique sequence.
pub(crate) fn longest_run(ranks: &[u8]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev = None;

    for &rank in ranks {
        run = match prev {
            Some(p) if rank == p + 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(rank);
    }

    longest
}

/// The highest rank among the given cards.
pub(crate) fn highest_rank<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Rank> {
    cards.into_iter().map(|c| c.rank()).max()
}

#[cfg(test)]
pub(crate) fn cards(codes: &[&str]) -> Vec<Card> {
    codes
        .iter()
        .map(|c| overcall_cards::parse_card(c).unwrap())
        .collect()
}
