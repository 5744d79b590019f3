//! What a seat can see when it is asked for a card.

use std::collections::HashSet;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Suit};

/// Visible game information for the seat about to play.
///
/// Built by the game engine for both the human collaborator and the AI;
/// it never exposes the opponent's hand or the deck order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: Seat,
    /// Own hand, in the order it was dealt and drawn.
    pub hand: Vec<Card>,
    /// The face-up card that fixed the trump suit.
    pub trump_card: Card,
    /// The opponent's card when responding; `None` when leading.
    pub table: Option<Card>,
    /// Cards left in the deck (the trump card included until drawn).
    pub deck_remaining: usize,
    /// Cards from completed tricks this game.
    pub played: Vec<Card>,
    pub own_score: u16,
    pub opponent_score: u16,
    /// 1-based trick number.
    pub trick_no: u8,
}

impl PlayerView {
    pub fn trump(&self) -> Suit {
        self.trump_card.suit
    }

    /// Cards the seat may play; Briscola has no follow-suit obligation.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.hand.clone()
    }

    /// Cards neither played nor in own hand: the opponent's hand plus the
    /// deck, treated as one undifferentiated pool.
    pub fn unknown_cards(&self) -> Vec<Card> {
        let seen: HashSet<Card> = self
            .played
            .iter()
            .chain(self.hand.iter())
            .copied()
            .collect();
        full_deck()
            .into_iter()
            .filter(|c| !seen.contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::parse_cards;

    fn view(hand: &[&str], played: &[&str]) -> PlayerView {
        PlayerView {
            seat: Seat::Computer,
            hand: parse_cards(hand),
            trump_card: parse_cards(&["5D"])[0],
            table: None,
            deck_remaining: 20,
            played: parse_cards(played),
            own_score: 0,
            opponent_score: 0,
            trick_no: 8,
        }
    }

    #[test]
    fn unknown_is_deck_minus_seen() {
        let v = view(&["AB", "2S", "7C"], &["3D", "0C", "4B", "5S"]);
        let unknown = v.unknown_cards();
        assert_eq!(unknown.len(), 40 - 3 - 4);
        for c in v.hand.iter().chain(v.played.iter()) {
            assert!(!unknown.contains(c));
        }
    }

    #[test]
    fn unknown_is_empty_once_everything_is_seen() {
        let all: Vec<String> = full_deck().iter().map(|c| c.to_string()).collect();
        let hand: Vec<&str> = all[..1].iter().map(String::as_str).collect();
        let played: Vec<&str> = all[1..].iter().map(String::as_str).collect();
        let v = view(&hand, &played);
        assert!(v.unknown_cards().is_empty());
    }
}
