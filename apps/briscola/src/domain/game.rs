//! One game of Briscola: deal, then tricks until all 40 cards are won.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::ai::AiPlayer;
use crate::domain::dealing::Deck;
use crate::domain::events::MatchEvent;
use crate::domain::player::Player;
use crate::domain::player_view::PlayerView;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, TOTAL_POINTS, WINNING_THRESHOLD};
use crate::domain::state::{Phase, Seat, TurnOrder};
use crate::domain::tricks::Trick;
use crate::domain::{Card, Suit};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::ports::{HumanChoice, HumanInput, MatchLog};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Tie,
    /// The human abandoned the match mid-game.
    Forfeit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(seat) => write!(f, "WINNER {seat}"),
            GameOutcome::Tie => write!(f, "TIE"),
            GameOutcome::Forfeit => write!(f, "FORFEIT"),
        }
    }
}

/// Final tally of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub human_points: u16,
    pub computer_points: u16,
    pub tricks_played: u8,
}

impl GameResult {
    fn forfeit(tricks_played: u8) -> Self {
        Self {
            outcome: GameOutcome::Forfeit,
            human_points: 0,
            computer_points: 0,
            tricks_played,
        }
    }

    pub fn points(&self, seat: Seat) -> u16 {
        match seat {
            Seat::Human => self.human_points,
            Seat::Computer => self.computer_points,
        }
    }
}

/// Decide a finished game from the human's points: more than 60 wins,
/// exactly 60 is a draw, anything else goes to the computer.
pub fn score_outcome(human_points: u16) -> GameOutcome {
    if human_points > WINNING_THRESHOLD {
        GameOutcome::Winner(Seat::Human)
    } else if human_points == WINNING_THRESHOLD {
        GameOutcome::Tie
    } else {
        GameOutcome::Winner(Seat::Computer)
    }
}

/// What a single trick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickSummary {
    pub trick_no: u8,
    pub trick: Trick,
    pub winner: Seat,
    pub points: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickStep {
    Resolved(TrickSummary),
    Forfeit,
}

/// A game in progress. Borrows the match's players so their identity
/// survives the game while hands and won piles are reset at the deal.
#[derive(Debug)]
pub struct Game<'a> {
    players: &'a mut [Player; 2],
    deck: Deck,
    trump_card: Card,
    leader: Seat,
    phase: Phase,
    table: Option<(Seat, Card)>,
    played: Vec<Card>,
    trick_no: u8,
    forfeited: bool,
}

impl<'a> Game<'a> {
    /// Shuffle a fresh deck and deal.
    pub fn deal<R: Rng + ?Sized>(
        players: &'a mut [Player; 2],
        leader: Seat,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        Self::deal_from(players, leader, Deck::shuffled(rng))
    }

    /// Deal from a prepared 40-card deck, front first.
    ///
    /// The human receives three cards, then the computer; the next card is
    /// revealed as trump and returned to the bottom of the deck.
    pub fn deal_from(
        players: &'a mut [Player; 2],
        leader: Seat,
        mut deck: Deck,
    ) -> Result<Self, DomainError> {
        let distinct: HashSet<&Card> = deck.cards().iter().collect();
        if deck.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "deal requires {DECK_SIZE} distinct cards, got {} ({} distinct)",
                deck.len(),
                distinct.len()
            )));
        }

        for p in players.iter_mut() {
            p.reset();
        }
        players[Seat::Human.index()].hand = deck.draw(HAND_SIZE);
        players[Seat::Computer.index()].hand = deck.draw(HAND_SIZE);
        let trump_card = deck
            .draw_one()
            .ok_or_else(|| DomainError::invariant("deck exhausted before trump"))?;
        deck.put_bottom(trump_card);

        let game = Self {
            players,
            deck,
            trump_card,
            leader,
            phase: Phase::Dealt,
            table: None,
            played: Vec::with_capacity(DECK_SIZE),
            trick_no: 0,
            forfeited: false,
        };
        game.check_accounting()?;
        debug!(trump = %trump_card, leader = %leader, "game dealt");
        Ok(game)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    pub fn trump(&self) -> Suit {
        self.trump_card.suit
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn trick_no(&self) -> u8 {
        self.trick_no
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Cards accounted for across deck, table, hands and won piles.
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + usize::from(self.table.is_some())
            + self.players.iter().map(Player::cards_held).sum::<usize>()
    }

    /// Card accounting must always total the full deck.
    pub fn check_accounting(&self) -> Result<(), DomainError> {
        let total = self.cards_in_play();
        if total != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card accounting: {total} cards tracked, expected {DECK_SIZE}"
            )));
        }
        Ok(())
    }

    /// What `seat` can see right now.
    pub fn view_for(&self, seat: Seat) -> PlayerView {
        PlayerView {
            seat,
            hand: self.player(seat).hand.clone(),
            trump_card: self.trump_card,
            table: self.table.map(|(_, c)| c),
            deck_remaining: self.deck.len(),
            played: self.played.clone(),
            own_score: self.player(seat).score(),
            opponent_score: self.player(seat.other()).score(),
            trick_no: self.trick_no + 1,
        }
    }

    /// Report the trump and who leads.
    pub fn announce(&self, game_no: u8, log: &mut dyn MatchLog) {
        log.record(&MatchEvent::Trump {
            card: self.trump_card,
        });
        log.record(&MatchEvent::GameStart {
            game_no,
            leader: self.leader,
            leader_name: self.player(self.leader).name.clone(),
        });
    }

    fn request_card(
        &mut self,
        seat: Seat,
        human: &mut dyn HumanInput,
        ai: &dyn AiPlayer,
    ) -> Result<Option<Card>, AppError> {
        if self.player(seat).hand.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyHand,
                format!("{seat} has no card to play"),
            )
            .into());
        }
        let view = self.view_for(seat);
        let player = &mut self.players[seat.index()];
        match seat {
            Seat::Human => match human.choose_card(&view)? {
                HumanChoice::Forfeit => Ok(None),
                HumanChoice::Play(card) => Ok(Some(player.take_from_hand(card)?)),
            },
            Seat::Computer => {
                let card = ai.choose_play(&view)?;
                let card = player
                    .take_from_hand(card)
                    .map_err(|e| AppError::ai(format!("AI chose an illegal card: {e}")))?;
                Ok(Some(card))
            }
        }
    }

    fn record_play(&self, seat: Seat, card: Card, log: &mut dyn MatchLog) {
        log.record(&MatchEvent::Play {
            seat,
            name: self.player(seat).name.clone(),
            card,
        });
    }

    fn abandon(&mut self) -> TrickStep {
        self.forfeited = true;
        self.phase = Phase::GameOver;
        info!(trick_no = self.trick_no + 1, "game forfeited");
        TrickStep::Forfeit
    }

    /// Play one trick: leader's card, follower's card, resolve, replenish.
    pub fn play_trick(
        &mut self,
        human: &mut dyn HumanInput,
        ai: &dyn AiPlayer,
        log: &mut dyn MatchLog,
    ) -> Result<TrickStep, AppError> {
        if self.is_over() {
            return Err(
                DomainError::validation(ValidationKind::PhaseMismatch, "game is over").into(),
            );
        }

        let trick_no = self.trick_no + 1;
        self.phase = Phase::TrickInProgress { trick_no };
        log.record(&MatchEvent::TrickStart {
            trick_no,
            computer_hand: self.player(Seat::Computer).hand.clone(),
        });

        let order = TurnOrder::led_by(self.leader);
        let Some(lead_card) = self.request_card(order.leader, human, ai)? else {
            return Ok(self.abandon());
        };
        self.table = Some((order.leader, lead_card));
        self.record_play(order.leader, lead_card, log);

        let Some(follow_card) = self.request_card(order.follower, human, ai)? else {
            return Ok(self.abandon());
        };
        self.record_play(order.follower, follow_card, log);

        let trick = Trick::new((order.leader, lead_card), (order.follower, follow_card));
        let winner = trick.winner(self.trump());
        let points = trick.points();

        self.table = None;
        self.players[winner.index()]
            .won_pile
            .extend(trick.cards());
        self.played.extend(trick.cards());
        log.record(&MatchEvent::Capture {
            seat: winner,
            name: self.player(winner).name.clone(),
            points,
        });

        // Winner draws first, then loser.
        for seat in [winner, winner.other()] {
            if let Some(card) = self.deck.draw_one() {
                self.players[seat.index()].hand.push(card);
            }
        }

        self.leader = winner;
        self.trick_no = trick_no;
        let won: usize = self.players.iter().map(|p| p.won_pile.len()).sum();
        self.phase = if won == DECK_SIZE {
            Phase::GameOver
        } else {
            Phase::TrickResolved { trick_no }
        };
        self.check_accounting()?;

        debug!(
            trick_no,
            lead = %lead_card,
            follow = %follow_card,
            winner = %winner,
            points,
            deck = self.deck.len(),
            "trick resolved"
        );

        Ok(TrickStep::Resolved(TrickSummary {
            trick_no,
            trick,
            winner,
            points,
        }))
    }

    /// Final tally once the game is over.
    pub fn result(&self) -> Result<GameResult, DomainError> {
        if !self.is_over() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "game still in progress",
            ));
        }
        if self.forfeited {
            return Ok(GameResult::forfeit(self.trick_no));
        }
        let human_points = self.player(Seat::Human).score();
        let computer_points = self.player(Seat::Computer).score();
        if human_points + computer_points != TOTAL_POINTS {
            return Err(DomainError::invariant(format!(
                "score conservation: {human_points} + {computer_points} != {TOTAL_POINTS}"
            )));
        }
        Ok(GameResult {
            outcome: score_outcome(human_points),
            human_points,
            computer_points,
            tricks_played: self.trick_no,
        })
    }

    /// Play every remaining trick and score the game.
    pub fn play_out(
        &mut self,
        game_no: u8,
        human: &mut dyn HumanInput,
        ai: &dyn AiPlayer,
        log: &mut dyn MatchLog,
    ) -> Result<GameResult, AppError> {
        if self.phase == Phase::Dealt {
            self.announce(game_no, log);
        }
        while !self.is_over() {
            if let TrickStep::Forfeit = self.play_trick(human, ai, log)? {
                break;
            }
        }

        let result = self.result()?;
        if result.outcome != GameOutcome::Forfeit {
            log.record(&MatchEvent::GameEnd {
                human: self.player(Seat::Human).name.clone(),
                human_points: result.human_points,
                computer: self.player(Seat::Computer).name.clone(),
                computer_points: result.computer_points,
            });
        }
        info!(
            game_no,
            outcome = %result.outcome,
            human_points = result.human_points,
            computer_points = result.computer_points,
            "game finished"
        );
        Ok(result)
    }
}
