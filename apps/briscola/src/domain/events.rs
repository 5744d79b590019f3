//! Events the engine reports to the match log collaborator.
//!
//! The engine decides what happens; each event renders as one log line via
//! `Display`, and front ends may narrate them however they like.

use std::fmt;

use crate::domain::cards_parsing::format_cards;
use crate::domain::game::GameOutcome;
use crate::domain::match_play::MatchRecord;
use crate::domain::match_summary::Outlook;
use crate::domain::state::Seat;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    MatchStart {
        human: String,
        computer: String,
        games: u8,
    },
    FirstLeaderDraw {
        human_card: Card,
        computer_card: Card,
        leader: Seat,
    },
    GameStart {
        game_no: u8,
        leader: Seat,
        leader_name: String,
    },
    Trump {
        card: Card,
    },
    TrickStart {
        trick_no: u8,
        computer_hand: Vec<Card>,
    },
    Play {
        seat: Seat,
        name: String,
        card: Card,
    },
    Capture {
        seat: Seat,
        name: String,
        points: u16,
    },
    GameEnd {
        human: String,
        human_points: u16,
        computer: String,
        computer_points: u16,
    },
    GameResult {
        game_no: u8,
        outcome: GameOutcome,
        records: [MatchRecord; 2],
    },
    Outlook {
        seat: Seat,
        name: String,
        match_points: f64,
        outlook: Outlook,
    },
    EarlyFinish,
    Forfeit {
        name: String,
    },
    MatchEnd {
        winner: Option<Seat>,
        winner_name: Option<String>,
        decided_on_points: bool,
        totals: [u32; 2],
    },
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::MatchStart {
                human,
                computer,
                games,
            } => write!(f, "MATCH_START {human} VS {computer} BEST_OF {games}"),
            MatchEvent::FirstLeaderDraw {
                human_card,
                computer_card,
                leader,
            } => write!(f, "DRAW {human_card} {computer_card} LEADER {leader}"),
            MatchEvent::GameStart {
                game_no,
                leader_name,
                ..
            } => write!(f, "GAME_START {game_no} LEADER {leader_name}"),
            MatchEvent::Trump { card } => write!(f, "TRUMP {card}"),
            MatchEvent::TrickStart {
                trick_no,
                computer_hand,
            } => write!(f, "TRICK {trick_no} AI_HAND {}", format_cards(computer_hand)),
            MatchEvent::Play { name, card, .. } => write!(f, "PLAY {name} {card}"),
            MatchEvent::Capture { name, points, .. } => write!(f, "TAKES {name} POINTS {points}"),
            MatchEvent::GameEnd {
                human,
                human_points,
                computer,
                computer_points,
            } => write!(
                f,
                "FINAL {human} {human_points} - {computer} {computer_points}"
            ),
            MatchEvent::GameResult {
                game_no, outcome, ..
            } => write!(f, "RESULT {game_no} {outcome}"),
            MatchEvent::Outlook {
                name,
                match_points,
                outlook,
                ..
            } => write!(f, "OUTLOOK {name} {match_points} {outlook}"),
            MatchEvent::EarlyFinish => write!(f, "EARLY_FINISH"),
            MatchEvent::Forfeit { name } => write!(f, "FORFEIT {name}"),
            MatchEvent::MatchEnd {
                winner_name,
                decided_on_points,
                totals,
                ..
            } => match winner_name {
                Some(name) if *decided_on_points => write!(
                    f,
                    "MATCH_END WINNER {name} ON_POINTS {}-{}",
                    totals[0], totals[1]
                ),
                Some(name) => write!(f, "MATCH_END WINNER {name}"),
                None => write!(f, "MATCH_END DRAW {}-{}", totals[0], totals[1]),
            },
        }
    }
}
