//! Seats and game phases.

use std::fmt;

/// The two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// The opponent of this seat.
    #[inline]
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Stable array index (Human = 0, Computer = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Computer => write!(f, "computer"),
        }
    }
}

/// Progression of a single game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Deck shuffled, trump revealed, three cards each.
    Dealt,
    /// Cards are being collected for trick `trick_no` (1-based).
    TrickInProgress { trick_no: u8 },
    /// Trick `trick_no` has a winner and cards were replenished.
    TrickResolved { trick_no: u8 },
    /// All 40 cards sit in the won piles.
    GameOver,
}

/// Turn order for one trick, recomputed from the current leader.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TurnOrder {
    pub leader: Seat,
    pub follower: Seat,
}

impl TurnOrder {
    pub fn led_by(leader: Seat) -> Self {
        Self {
            leader,
            follower: leader.other(),
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        [self.leader, self.follower]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        for seat in Seat::BOTH {
            assert_ne!(seat.other(), seat);
            assert_eq!(seat.other().other(), seat);
        }
    }

    #[test]
    fn turn_order_puts_leader_first() {
        let order = TurnOrder::led_by(Seat::Computer);
        assert_eq!(order.seats(), [Seat::Computer, Seat::Human]);
    }
}
