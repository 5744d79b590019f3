//! Per-player state: hand, won pile, score.

use crate::domain::cards_logic::points;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub won_pile: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            won_pile: Vec::new(),
        }
    }

    /// Sum of trick points in the won pile.
    pub fn score(&self) -> u16 {
        self.won_pile.iter().map(|&c| points(c) as u16).sum()
    }

    /// Clear hand and won pile for a new game; the name stays.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.won_pile.clear();
    }

    /// Remove `card` from the hand, preserving the order of the rest.
    pub fn take_from_hand(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.hand.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} is not in {}'s hand", self.name),
            )
        })?;
        Ok(self.hand.remove(pos))
    }

    pub fn cards_held(&self) -> usize {
        self.hand.len() + self.won_pile.len()
    }
}
