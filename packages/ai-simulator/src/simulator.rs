//! In-memory game runner for AI-vs-AI evaluation.
//!
//! Seat 0 sits in the human chair and is driven through the same
//! `HumanInput` port a person would use; seat 1 is the computer opponent.

use briscola::adapters::match_logs::NullLog;
use briscola::ai::AutopilotInput;
use briscola::domain::game::TrickSummary;
use briscola::domain::{GameOutcome, Player, TrickStep};
use briscola::{AiPlayer, AppError, Card, Game, Seat};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of simulating one complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Card points per seat (seat 0 = human chair).
    pub final_scores: [u16; 2],
    /// `Some(seat)` for a win, `None` for a 60-60 draw.
    pub winner: Option<u8>,
    pub leader: u8,
    pub trump: Card,
    pub tricks: Vec<TrickSummary>,
}

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("engine error: {0}")]
    Engine(#[from] AppError),
    #[error("game {0} ended by forfeit")]
    Forfeit(u32),
}

pub fn seat_index(seat: Seat) -> u8 {
    seat.index() as u8
}

/// One seeded game between two AIs.
pub struct Simulator {
    seed: u64,
    game_id: u32,
}

impl Simulator {
    pub fn new(seed: u64, game_id: u32) -> Self {
        Self { seed, game_id }
    }

    /// Odd games are led by seat 0, even games by seat 1.
    fn leader(&self) -> Seat {
        if self.game_id % 2 == 1 {
            Seat::Human
        } else {
            Seat::Computer
        }
    }

    pub fn simulate_game(
        self,
        seat0: Box<dyn AiPlayer>,
        seat1: &dyn AiPlayer,
        names: [&str; 2],
    ) -> Result<GameResult, SimulatorError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut players = [Player::new(names[0]), Player::new(names[1])];
        let leader = self.leader();
        let mut game = Game::deal(&mut players, leader, &mut rng).map_err(AppError::from)?;
        let trump = game.trump_card();

        let mut human = AutopilotInput::new(seat0);
        let mut log = NullLog;
        let mut tricks = Vec::with_capacity(20);
        while !game.is_over() {
            match game.play_trick(&mut human, seat1, &mut log)? {
                TrickStep::Resolved(summary) => tricks.push(summary),
                TrickStep::Forfeit => return Err(SimulatorError::Forfeit(self.game_id)),
            }
        }

        let result = game.result().map_err(AppError::from)?;
        let winner = match result.outcome {
            GameOutcome::Winner(seat) => Some(seat_index(seat)),
            _ => None,
        };
        Ok(GameResult {
            final_scores: [result.human_points, result.computer_points],
            winner,
            leader: seat_index(leader),
            trump,
            tricks,
        })
    }
}
