//! End-to-end matches through the public API with scripted collaborators.

mod common;

use briscola::adapters::leaderboard_memory::InMemoryLeaderboard;
use briscola::adapters::match_logs::MemoryLog;
use briscola::ai::{create_ai, AutopilotInput, Maestro, RandomPlayer};
use briscola::domain::GameOutcome;
use briscola::{
    DomainError, LeaderboardStore, Match, MatchCollaborators, MatchResult, Seat, ValidationKind,
};
use common::QuitAfter;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn autopilot_match(seed: u64, games: u8, log: &mut MemoryLog) -> MatchResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Match::new("Anna", "AI-Bakodu", games).expect("valid length");
    let ai = Maestro::new();
    let mut human = AutopilotInput::new(Box::new(RandomPlayer::new(Some(seed))));
    m.run(
        &mut rng,
        MatchCollaborators {
            human: &mut human,
            ai: &ai,
            log,
            leaderboard: None,
        },
    )
    .expect("match runs to completion")
}

#[test]
fn single_game_match_logs_every_step() {
    let mut log = MemoryLog::default();
    let result = autopilot_match(1, 1, &mut log);
    let lines = log.lines();

    assert_eq!(lines[0], "MATCH_START Anna VS AI-Bakodu BEST_OF 1");
    assert!(lines[1].starts_with("DRAW "));
    assert!(lines[2].starts_with("TRUMP "));
    assert!(lines[3].starts_with("GAME_START 1 LEADER "));
    assert_eq!(lines.iter().filter(|l| l.starts_with("TRICK ")).count(), 20);
    assert!(lines.iter().any(|l| l.starts_with("FINAL Anna ")));
    assert!(lines.iter().any(|l| l.starts_with("RESULT 1 ")));
    assert!(lines.last().is_some_and(|l| l.starts_with("MATCH_END")));
    // One game, nothing left to forecast.
    assert!(!lines.iter().any(|l| l.starts_with("OUTLOOK")));

    assert_eq!(result.games_played, 1);
    assert!(!result.ended_early);
}

#[test]
fn computer_hand_is_logged_at_each_trick() {
    let mut log = MemoryLog::default();
    autopilot_match(2, 1, &mut log);
    let first_trick = log
        .lines()
        .iter()
        .find(|l| l.starts_with("TRICK 1 AI_HAND "))
        .expect("first trick logged");
    assert_eq!(first_trick.split(' ').count(), 3 + 3);
    let last_trick = log
        .lines()
        .iter()
        .find(|l| l.starts_with("TRICK 20 AI_HAND "))
        .expect("last trick logged");
    assert_eq!(last_trick.split(' ').count(), 3 + 1);
}

#[test]
fn outlook_follows_every_game_with_games_left() {
    for seed in 0..10u64 {
        let mut log = MemoryLog::default();
        let result = autopilot_match(seed, 5, &mut log);
        let outlooks = log
            .lines()
            .iter()
            .filter(|l| l.starts_with("OUTLOOK"))
            .count();
        assert_eq!(
            outlooks,
            2 * usize::from(result.games_played.min(4)),
            "seed {seed}"
        );
    }
}

#[test]
fn early_finish_is_logged_when_decided() {
    for seed in 0..20u64 {
        let mut log = MemoryLog::default();
        let result = autopilot_match(seed, 7, &mut log);
        let lines = log.lines();
        let finish = lines.iter().position(|l| l == "EARLY_FINISH");
        assert_eq!(finish.is_some(), result.ended_early, "seed {seed}");
        match finish {
            Some(at) => {
                assert!(result.games_played < 7);
                // The deciding game still reports both sides' standing.
                let before = &lines[at - 2..at];
                assert!(before.iter().all(|l| l.starts_with("OUTLOOK")), "seed {seed}");
                assert!(before.iter().any(|l| l.ends_with("SECURED")), "seed {seed}");
            }
            None => assert_eq!(result.games_played, 7),
        }
    }
}

#[test]
fn forfeit_mid_game_hands_computer_the_match() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut m = Match::new("Anna", "AI-Bakodu", 3).unwrap();
    let ai = Maestro::new();
    let board = InMemoryLeaderboard::default();
    let mut log = MemoryLog::default();
    // Plays four cards, then quits on the fifth decision.
    let mut human = QuitAfter { remaining: 5 };
    let result = m
        .run(
            &mut rng,
            MatchCollaborators {
                human: &mut human,
                ai: &ai,
                log: &mut log,
                leaderboard: Some(&board),
            },
        )
        .unwrap();

    assert!(result.forfeited);
    assert_eq!(result.winner, Some(Seat::Computer));
    assert_eq!(result.records[Seat::Computer.index()].wins, 3);
    assert_eq!(result.totals, [0, 0]);
    assert!(log.lines().iter().any(|l| l == "FORFEIT Anna"));
    assert!(!log.lines().iter().any(|l| l.starts_with("RESULT")));
    assert_eq!(board.load()[0].name, "AI-Bakodu");
}

#[test]
fn winner_is_recorded_on_the_leaderboard() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut m = Match::new("Anna", "AI-Bakodu", 3).unwrap();
    let ai = create_ai("Maestro", None).expect("registered");
    let mut human = AutopilotInput::new(create_ai("RandomPlayer", Some(31)).expect("registered"));
    let board = InMemoryLeaderboard::default();
    let result = m
        .run(
            &mut rng,
            MatchCollaborators {
                human: &mut human,
                ai: ai.as_ref(),
                log: &mut MemoryLog::default(),
                leaderboard: Some(&board),
            },
        )
        .unwrap();

    let entries = board.load();
    match result.winner {
        Some(seat) => {
            assert_eq!(entries.len(), 1);
            let record = result.records[seat.index()];
            assert_eq!(entries[0].wins, record.wins);
            assert_eq!(entries[0].total_points, record.total_points);
            assert_eq!(entries[0].date.len(), "dd/mm/yyyy".len());
        }
        None => assert!(entries.is_empty()),
    }
}

#[test]
fn invalid_length_is_a_validation_error() {
    let err = Match::new("Anna", "AI-Bakodu", 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidMatchLength, _)
    ));
}

#[test]
fn game_outcome_renders_for_logs() {
    assert_eq!(GameOutcome::Winner(Seat::Human).to_string(), "WINNER human");
    assert_eq!(GameOutcome::Tie.to_string(), "TIE");
    assert_eq!(GameOutcome::Forfeit.to_string(), "FORFEIT");
}
