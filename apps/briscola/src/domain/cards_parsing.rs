//! Card codes: two characters, rank then suit (e.g., "AB", "0D", "7C")
//!
//! Rank codes are `A`, `2`..`7`, `8` (Jack), `9` (Knight), `0` (King).
//! Suit codes are `B` (Clubs), `S` (Swords), `C` (Cups), `D` (Coins).

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Rank {
    pub fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Jack => '8',
            Rank::Knight => '9',
            Rank::King => '0',
        }
    }

    fn from_code(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            'A' | '1' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Jack),
            '9' => Some(Rank::Knight),
            '0' => Some(Rank::King),
            _ => None,
        }
    }
}

impl Suit {
    pub fn code(self) -> char {
        match self {
            Suit::Clubs => 'B',
            Suit::Swords => 'S',
            Suit::Cups => 'C',
            Suit::Coins => 'D',
        }
    }

    fn from_code(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'B' => Some(Suit::Clubs),
            'S' => Some(Suit::Swords),
            'C' => Some(Suit::Cups),
            'D' => Some(Suit::Coins),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::ParseCard(s.to_string()));
        };
        let rank = Rank::from_code(rank_ch).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let suit = Suit::from_code(suit_ch).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AB", "3D") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Space-separated codes, as used in prompts and log lines.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}
