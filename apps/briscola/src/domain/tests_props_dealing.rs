//! Property tests for deck construction, shuffling and drawing.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::test_prelude::proptest_config;
use crate::domain::{full_deck, Card, Deck};

proptest! {
    #![proptest_config(proptest_config())]

    /// A shuffle is a permutation of the full deck.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        prop_assert_eq!(deck.len(), DECK_SIZE);
        let set: HashSet<Card> = deck.cards().iter().copied().collect();
        let all: HashSet<Card> = full_deck().into_iter().collect();
        prop_assert_eq!(set, all);
    }

    /// Same seed, same order.
    #[test]
    fn prop_shuffle_is_seed_deterministic(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    /// Drawing never fails and never loses or invents cards.
    #[test]
    fn prop_draw_conserves_cards(
        seed in any::<u64>(),
        draws in prop::collection::vec(0usize..8, 1..12),
    ) {
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        let mut drawn: Vec<Card> = Vec::new();
        for n in draws {
            let before = deck.len();
            let got = deck.draw(n);
            prop_assert_eq!(got.len(), n.min(before));
            drawn.extend(got);
            prop_assert_eq!(drawn.len() + deck.len(), DECK_SIZE);
        }
        let unique: HashSet<Card> = drawn.iter().chain(deck.cards()).copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }
}
