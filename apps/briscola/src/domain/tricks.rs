//! Trick resolution.

use crate::domain::cards_logic::{card_beats, points};
use crate::domain::state::Seat;
use crate::domain::{Card, Suit};

/// A completed two-card trick, leader first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trick {
    pub lead: (Seat, Card),
    pub follow: (Seat, Card),
}

impl Trick {
    pub fn new(lead: (Seat, Card), follow: (Seat, Card)) -> Self {
        Self { lead, follow }
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.lead.1, self.follow.1]
    }

    /// Trick points captured by whoever wins it.
    pub fn points(&self) -> u16 {
        self.cards().iter().map(|&c| points(c) as u16).sum()
    }

    pub fn winner(&self, trump: Suit) -> Seat {
        resolve_trick(self.lead, self.follow, trump)
    }
}

/// Decide who takes a trick.
///
/// - exactly one trump: its player wins;
/// - both trump, or same suit: higher `comp_value` wins;
/// - otherwise the leader wins.
///
/// Equal strength goes to the leader. With the standard point table two
/// distinct cards of one suit never tie, so this only fixes the contract.
pub fn resolve_trick(lead: (Seat, Card), follow: (Seat, Card), trump: Suit) -> Seat {
    if card_beats(follow.1, lead.1, trump) {
        follow.0
    } else {
        lead.0
    }
}
