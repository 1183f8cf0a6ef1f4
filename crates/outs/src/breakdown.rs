// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per draw outs terms and their description.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outs contributed by each draw type and the board danger discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutsBreakdown {
    /// Outs to improve a made hand (sets, trips, two pair).
    pub made_hand: f64,
    /// Outs to complete a flush draw.
    pub flush: f64,
    /// Outs to complete a straight draw.
    pub straight: f64,
    /// Outs to pair an overcard.
    pub overcard: f64,
    /// Fractional outs for runner-runner draws.
    pub backdoor: f64,
    /// Outs removed because the board is dangerous.
    pub discount: f64,
}

impl OutsBreakdown {
    /// The discounted sum of all terms, never negative.
    pub fn total(&self) -> f64 {
        let outs = self.made_hand + self.flush + self.straight + self.overcard + self.backdoor;
        f64::max(outs - self.discount, 0.0)
    }
}

/// Formats outs with one decimal only when fractional.
struct Outs(f64);

impl fmt::Display for Outs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

impl fmt::Display for OutsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        if total == 0.0 {
            return write!(f, "No outs");
        }

        let straight_label = if self.straight >= 8.0 {
            "open-ended straight draw outs"
        } else {
            "gutshot straight draw outs"
        };

        let terms = [
            (self.flush, "flush draw outs"),
            (self.straight, straight_label),
            (self.overcard, "overcard outs"),
            (self.made_hand, "made hand improvement outs"),
            (self.backdoor, "backdoor draw outs"),
        ];

        let mut parts = terms
            .iter()
            .filter(|(outs, _)| *outs > 0.0)
            .map(|(outs, label)| format!("{} {label}", Outs(*outs)))
            .collect::<Vec<_>>();

        if self.discount > 0.0 {
            parts.push(format!("minus {} for dangerous board", Outs(self.discount)));
        }

        write!(f, "{} (total: {})", parts.join(", "), Outs(total))
    }
}
