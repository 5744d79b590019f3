//! Card game logic: trick-point values, comparative strength, trump checks

use super::cards_types::{Card, Rank, Suit};

/// Trick-point value: Ace 11, Three 10, King 4, Knight 3, Jack 2, others 0.
pub fn points(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Three => 10,
        Rank::King => 4,
        Rank::Knight => 3,
        Rank::Jack => 2,
        _ => 0,
    }
}

/// Composite strength: points first, rank number as the tie-break.
///
/// Ace 111 > Three 103 > King 50 > Knight 39 > Jack 28 > Seven 7 > ... > Two 2.
pub fn comp_value(card: Card) -> u16 {
    points(card) as u16 * 10 + card.rank.number() as u16
}

pub fn is_trump(card: Card, trump: Suit) -> bool {
    card.suit == trump
}

/// Whether `follow`, played second, takes the trick from `lead`.
///
/// An off-suit non-trump card never beats the lead, and equal strength
/// leaves the trick with the leader.
pub fn card_beats(follow: Card, lead: Card, trump: Suit) -> bool {
    let follow_trump = is_trump(follow, trump);
    let lead_trump = is_trump(lead, trump);
    if follow_trump && !lead_trump {
        return true;
    }
    if lead_trump && !follow_trump {
        return false;
    }
    // Same trump status
    if follow.suit == lead.suit {
        return comp_value(follow) > comp_value(lead);
    }
    false
}
