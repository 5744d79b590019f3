//! Property tests for whole games: card accounting and score conservation.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adapters::match_logs::NullLog;
use crate::ai::{AutopilotInput, Maestro, RandomPlayer};
use crate::domain::rules::{DECK_SIZE, TOTAL_POINTS};
use crate::domain::test_prelude::proptest_config;
use crate::domain::{Game, Phase, Player, Seat, TrickStep};

fn seat(human: bool) -> Seat {
    if human {
        Seat::Human
    } else {
        Seat::Computer
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// After every trick the 40 cards are all accounted for, the winner
    /// leads next and the deck shrinks by two until it is empty.
    #[test]
    fn prop_accounting_holds_every_trick(
        deal_seed in any::<u64>(),
        ai_seed in any::<u64>(),
        human_leads in any::<bool>(),
    ) {
        let mut rng = StdRng::seed_from_u64(deal_seed);
        let mut players = [Player::new("Anna"), Player::new("AI-Bakodu")];
        let mut game = Game::deal(&mut players, seat(human_leads), &mut rng).unwrap();
        let mut human = AutopilotInput::new(Box::new(RandomPlayer::new(Some(ai_seed))));
        let ai = Maestro::new();

        let mut tricks = 0u8;
        while !game.is_over() {
            let deck_before = game.deck().len();
            let step = game.play_trick(&mut human, &ai, &mut NullLog).unwrap();
            let TrickStep::Resolved(summary) = step else {
                return Err(TestCaseError::fail("autopilot never forfeits"));
            };
            tricks += 1;
            prop_assert_eq!(game.cards_in_play(), DECK_SIZE);
            prop_assert_eq!(game.leader(), summary.winner);
            prop_assert_eq!(game.deck().len(), deck_before.saturating_sub(2));
            prop_assert!(game.player(Seat::Human).hand.len() <= 3);
            prop_assert!(game.player(Seat::Computer).hand.len() <= 3);
        }
        prop_assert_eq!(tricks, 20);
        prop_assert_eq!(game.phase(), Phase::GameOver);
    }

    /// Final scores always sum to 120.
    #[test]
    fn prop_scores_are_conserved(
        deal_seed in any::<u64>(),
        ai_seed in any::<u64>(),
        human_leads in any::<bool>(),
    ) {
        let mut rng = StdRng::seed_from_u64(deal_seed);
        let mut players = [Player::new("Anna"), Player::new("AI-Bakodu")];
        let mut game = Game::deal(&mut players, seat(human_leads), &mut rng).unwrap();
        let mut human = AutopilotInput::new(Box::new(RandomPlayer::new(Some(ai_seed))));
        let ai = RandomPlayer::new(Some(ai_seed.wrapping_add(1)));
        let result = game.play_out(1, &mut human, &ai, &mut NullLog).unwrap();
        prop_assert_eq!(result.human_points + result.computer_points, TOTAL_POINTS);
    }
}
