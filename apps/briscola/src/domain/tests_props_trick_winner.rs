//! Property tests for trick resolution (pure domain).
//!
//! The oracle below ranks cards with its own strength table so a regression
//! in `comp_value` or `card_beats` shows up as a disagreement.

use proptest::prelude::*;

use crate::domain::state::Seat;
use crate::domain::test_gens;
use crate::domain::test_prelude::proptest_config;
use crate::domain::{card_beats, resolve_trick, Card, Rank, Suit};

fn strength(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 10,
        Rank::Three => 9,
        Rank::King => 8,
        Rank::Knight => 7,
        Rank::Jack => 6,
        Rank::Seven => 5,
        Rank::Six => 4,
        Rank::Five => 3,
        Rank::Four => 2,
        Rank::Two => 1,
    }
}

/// True when the second card takes the trick.
fn oracle_follower_wins(lead: Card, follow: Card, trump: Suit) -> bool {
    let key = |c: Card, is_lead: bool| {
        (
            (c.suit == trump) as u8,
            (c.suit == lead.suit) as u8,
            strength(c.rank),
            is_lead as u8,
        )
    };
    key(follow, false) > key(lead, true)
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_winner_matches_oracle(
        (lead, follow) in test_gens::two_distinct_cards(),
        trump in test_gens::suit(),
    ) {
        let winner = resolve_trick((Seat::Human, lead), (Seat::Computer, follow), trump);
        let expected = if oracle_follower_wins(lead, follow, trump) {
            Seat::Computer
        } else {
            Seat::Human
        };
        prop_assert_eq!(winner, expected, "lead={} follow={} trump={:?}", lead, follow, trump);
        prop_assert_eq!(card_beats(follow, lead, trump), expected == Seat::Computer);
    }

    #[test]
    fn prop_resolution_is_deterministic(
        (lead, follow) in test_gens::two_distinct_cards(),
        trump in test_gens::suit(),
        leader_is_human in any::<bool>(),
    ) {
        let leader = if leader_is_human { Seat::Human } else { Seat::Computer };
        let a = resolve_trick((leader, lead), (leader.other(), follow), trump);
        let b = resolve_trick((leader, lead), (leader.other(), follow), trump);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_lone_trump_always_wins(
        (a, b) in test_gens::two_distinct_cards(),
        trump in test_gens::suit(),
    ) {
        prop_assume!((a.suit == trump) != (b.suit == trump));
        let trump_card = if a.suit == trump { a } else { b };
        let other = if a.suit == trump { b } else { a };

        let trump_leads = resolve_trick((Seat::Human, trump_card), (Seat::Computer, other), trump);
        prop_assert_eq!(trump_leads, Seat::Human);
        let trump_follows = resolve_trick((Seat::Human, other), (Seat::Computer, trump_card), trump);
        prop_assert_eq!(trump_follows, Seat::Computer);
    }

    #[test]
    fn prop_off_suit_follow_never_wins(
        (lead, follow) in test_gens::two_distinct_cards(),
        trump in test_gens::suit(),
    ) {
        prop_assume!(follow.suit != lead.suit && follow.suit != trump);
        prop_assert!(!card_beats(follow, lead, trump));
    }
}
