//! Best-of-N match controller.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::AiPlayer;
use crate::domain::cards_logic::comp_value;
use crate::domain::dealing::Deck;
use crate::domain::events::MatchEvent;
use crate::domain::game::{Game, GameOutcome, GameResult};
use crate::domain::match_summary::outlook;
use crate::domain::player::Player;
use crate::domain::rules::{games_to_win, match_points, valid_match_length, MATCH_LENGTHS};
use crate::domain::state::Seat;
use crate::domain::Card;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::leaderboard::{record_result, today, LeaderboardEntry};
use crate::ports::{HumanInput, LeaderboardStore, MatchLog};

/// One side's running record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    /// Card points summed over every completed game.
    pub total_points: u32,
}

impl MatchRecord {
    pub fn match_points(&self) -> f64 {
        match_points(self.wins, self.ties)
    }
}

/// Outcome of the initial one-card draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstLeaderDraw {
    pub human_card: Card,
    pub computer_card: Card,
    pub leader: Seat,
}

/// Each side draws one card from a fresh deck; the human leads on a
/// greater or equal comparison value.
pub fn decide_first_leader<R: Rng + ?Sized>(rng: &mut R) -> Result<FirstLeaderDraw, DomainError> {
    let mut deck = Deck::shuffled(rng);
    let (Some(human_card), Some(computer_card)) = (deck.draw_one(), deck.draw_one()) else {
        return Err(DomainError::invariant("fresh deck could not supply two cards"));
    };
    let leader = if comp_value(human_card) >= comp_value(computer_card) {
        Seat::Human
    } else {
        Seat::Computer
    };
    Ok(FirstLeaderDraw {
        human_card,
        computer_card,
        leader,
    })
}

/// Whether the match is decided before all `games` are played.
pub fn should_end_early(records: &[MatchRecord; 2], games: u8, played: u8) -> bool {
    if played >= games {
        return false;
    }
    let target = games_to_win(games);
    let human = records[Seat::Human.index()].match_points();
    let computer = records[Seat::Computer.index()].match_points();
    let remaining = f64::from(games - played);
    (human >= target || computer >= target) && (human - computer).abs() > remaining
}

/// Winner on match points, then on cumulative card points.
///
/// Returns `(winner, decided_on_points)`; `(None, false)` is an absolute draw.
pub fn decide_winner(records: &[MatchRecord; 2]) -> (Option<Seat>, bool) {
    let human = &records[Seat::Human.index()];
    let computer = &records[Seat::Computer.index()];
    let (hp, cp) = (human.match_points(), computer.match_points());
    if hp > cp {
        (Some(Seat::Human), false)
    } else if cp > hp {
        (Some(Seat::Computer), false)
    } else if human.total_points > computer.total_points {
        (Some(Seat::Human), true)
    } else if computer.total_points > human.total_points {
        (Some(Seat::Computer), true)
    } else {
        (None, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub winner: Option<Seat>,
    pub decided_on_points: bool,
    pub records: [MatchRecord; 2],
    pub totals: [u32; 2],
    pub games_played: u8,
    pub ended_early: bool,
    pub forfeited: bool,
    /// The winner's entry reached the leaderboard store.
    pub leaderboard_saved: bool,
}

/// The outside world as seen by a running match.
pub struct MatchCollaborators<'c> {
    pub human: &'c mut dyn HumanInput,
    pub ai: &'c dyn AiPlayer,
    pub log: &'c mut dyn MatchLog,
    pub leaderboard: Option<&'c dyn LeaderboardStore>,
}

#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    games: u8,
    records: [MatchRecord; 2],
    games_played: u8,
}

impl Match {
    pub fn new(
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
        games: u8,
    ) -> Result<Self, DomainError> {
        if !valid_match_length(games) {
            return Err(DomainError::validation(
                ValidationKind::InvalidMatchLength,
                format!(
                    "match length must be between {} and {}, got {games}",
                    MATCH_LENGTHS.start(),
                    MATCH_LENGTHS.end()
                ),
            ));
        }
        Ok(Self {
            players: [Player::new(human_name), Player::new(computer_name)],
            games,
            records: [MatchRecord::default(); 2],
            games_played: 0,
        })
    }

    pub fn games(&self) -> u8 {
        self.games
    }

    pub fn games_played(&self) -> u8 {
        self.games_played
    }

    pub fn records(&self) -> &[MatchRecord; 2] {
        &self.records
    }

    pub fn name(&self, seat: Seat) -> &str {
        &self.players[seat.index()].name
    }

    fn apply(&mut self, result: &GameResult) {
        let [human, computer] = &mut self.records;
        match result.outcome {
            GameOutcome::Winner(Seat::Human) => {
                human.wins += 1;
                computer.losses += 1;
            }
            GameOutcome::Winner(Seat::Computer) => {
                computer.wins += 1;
                human.losses += 1;
            }
            GameOutcome::Tie => {
                human.ties += 1;
                computer.ties += 1;
            }
            GameOutcome::Forfeit => return,
        }
        human.total_points += u32::from(result.human_points);
        computer.total_points += u32::from(result.computer_points);
    }

    fn report_outlook(&self, log: &mut dyn MatchLog) {
        for seat in Seat::BOTH {
            let points = self.records[seat.index()].match_points();
            if let Some(outlook) = outlook(points, self.games, self.games_played) {
                log.record(&MatchEvent::Outlook {
                    seat,
                    name: self.name(seat).to_string(),
                    match_points: points,
                    outlook,
                });
            }
        }
    }

    /// Play the match to completion, alternating the leader every game.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        collab: MatchCollaborators<'_>,
    ) -> Result<MatchResult, AppError> {
        let MatchCollaborators {
            human,
            ai,
            log,
            leaderboard,
        } = collab;

        log.record(&MatchEvent::MatchStart {
            human: self.name(Seat::Human).to_string(),
            computer: self.name(Seat::Computer).to_string(),
            games: self.games,
        });
        let draw = decide_first_leader(rng)?;
        log.record(&MatchEvent::FirstLeaderDraw {
            human_card: draw.human_card,
            computer_card: draw.computer_card,
            leader: draw.leader,
        });
        info!(games = self.games, first_leader = %draw.leader, "match started");

        let mut leader = draw.leader;
        let mut ended_early = false;
        let mut forfeited = false;

        for game_no in 1..=self.games {
            let result = {
                let mut game = Game::deal(&mut self.players, leader, rng)?;
                game.play_out(game_no, human, ai, log)?
            };
            self.games_played = game_no;

            if result.outcome == GameOutcome::Forfeit {
                self.records[Seat::Computer.index()].wins = u32::from(self.games);
                log.record(&MatchEvent::Forfeit {
                    name: self.name(Seat::Human).to_string(),
                });
                forfeited = true;
                break;
            }

            self.apply(&result);
            log.record(&MatchEvent::GameResult {
                game_no,
                outcome: result.outcome,
                records: self.records,
            });

            self.report_outlook(log);
            if should_end_early(&self.records, self.games, self.games_played) {
                log.record(&MatchEvent::EarlyFinish);
                ended_early = true;
                break;
            }
            leader = leader.other();
        }

        let (winner, decided_on_points) = decide_winner(&self.records);
        let totals = self.records.map(|r| r.total_points);
        log.record(&MatchEvent::MatchEnd {
            winner,
            winner_name: winner.map(|s| self.name(s).to_string()),
            decided_on_points,
            totals,
        });
        info!(
            winner = winner.map(|s| s.to_string()).unwrap_or_else(|| "draw".into()),
            decided_on_points,
            games_played = self.games_played,
            ended_early,
            forfeited,
            "match finished"
        );

        let mut leaderboard_saved = false;
        if let (Some(seat), Some(store)) = (winner, leaderboard) {
            let entry =
                LeaderboardEntry::from_record(self.name(seat), &self.records[seat.index()], today());
            match record_result(store, entry) {
                Ok(_) => leaderboard_saved = true,
                Err(e) => warn!(error = %e, "leaderboard not updated"),
            }
        }

        Ok(MatchResult {
            winner,
            decided_on_points,
            records: self.records,
            totals,
            games_played: self.games_played,
            ended_early,
            forfeited,
            leaderboard_saved,
        })
    }
}
