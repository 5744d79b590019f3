//! Core card-related types: Card, Rank, Suit

/// The four suits of the Italian deck, in canonical deck order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    /// Bastoni
    Clubs,
    /// Spade
    Swords,
    /// Coppe
    Cups,
    /// Denari
    Coins,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Swords, Suit::Cups, Suit::Coins];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Swords => "Swords",
            Suit::Cups => "Cups",
            Suit::Coins => "Coins",
        }
    }
}

/// Ranks 1..=10. Jack, Knight and King are the face cards 8, 9 and 10.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Jack = 8,
    Knight = 9,
    King = 10,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Jack,
        Rank::Knight,
        Rank::King,
    ];

    /// Numeric rank, 1 (Ace) to 10 (King).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Jack => "Jack",
            Rank::Knight => "Knight",
            Rank::King => "King",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Long form used in narration, e.g. "Knight of Cups".
    pub fn long_name(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

// Note: Ord on Card is only for stable sorting: suit order B<S<C<D then rank order.
// Do not use for trick resolution; see `cards_logic::comp_value`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_numbers_follow_italian_deck() {
        let numbers: Vec<u8> = Rank::ALL.iter().map(|r| r.number()).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn long_name_reads_naturally() {
        assert_eq!(
            Card::new(Rank::Knight, Suit::Cups).long_name(),
            "Knight of Cups"
        );
    }

    #[test]
    fn sorting_groups_by_suit_then_rank() {
        let mut cards = vec![
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Coins),
            Card::new(Rank::Ace, Suit::Clubs),
        ];
        cards.sort();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::King, Suit::Clubs),
                Card::new(Rank::Ace, Suit::Coins),
            ]
        );
    }
}
