//! Maestro: the computer opponent's one-ply heuristic.
//!
//! Responding (a card is on the table), every candidate is scored by the
//! trick it would produce:
//! - won tricks are worth their points, lost tricks cost them;
//! - trumping a non-trump for fewer than 10 points costs an extra 20;
//! - a losing candidate also costs 5 per point it hands over.
//!
//! Leading, every candidate is played against each card the opponent could
//! hold (the unknown pool: deck minus played cards minus own hand):
//! - average signed trick points and win rate over the pool;
//! - exposure risk for a non-trump point card, scaled by the share of
//!   trumps left in the pool;
//! - an opportunity cost for spending a valuable trump while the deck is
//!   still deep;
//! - a small bonus for losing the lead cheaply, a matching malus for
//!   keeping it.
//!
//! The highest score wins; the first candidate in hand order wins ties.
//! No randomness: the same view always yields the same card.

use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{card_beats, is_trump, points, Card, Suit};

/// Extra cost for trumping a non-trump trick worth less than [`TRUMP_WASTE_THRESHOLD`].
pub const TRUMP_WASTE_PENALTY: i32 = 20;
pub const TRUMP_WASTE_THRESHOLD: i32 = 10;
/// Cost per point of a candidate that loses the trick.
pub const FEED_PENALTY_PER_POINT: i32 = 5;

/// Weight of a point card's exposure to being trumped.
pub const EXPOSURE_WEIGHT: f64 = 30.0;
/// Trump cards worth more than this are held back while the deck is deep.
pub const TRUMP_HOLD_MIN_POINTS: u8 = 3;
pub const TRUMP_HOLD_BONUS: f64 = 5.0;
pub const DECK_DEPTH_SCALE: f64 = 10.0;
/// Value of not holding the lead on the next trick.
pub const NEXT_TRICK_ADVANTAGE: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct Maestro;

impl Maestro {
    pub const NAME: &'static str = "Maestro";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Score of answering `table` with `candidate`.
    pub fn response_score(table: Card, candidate: Card, trump: Suit) -> i32 {
        let trick_points = i32::from(points(table)) + i32::from(points(candidate));
        if card_beats(candidate, table, trump) {
            let mut score = trick_points;
            if is_trump(candidate, trump)
                && !is_trump(table, trump)
                && trick_points < TRUMP_WASTE_THRESHOLD
            {
                score -= TRUMP_WASTE_PENALTY;
            }
            score
        } else {
            -trick_points - i32::from(points(candidate)) * FEED_PENALTY_PER_POINT
        }
    }

    /// Expected value of leading `candidate` into the `unknown` pool.
    pub fn lead_score(candidate: Card, unknown: &[Card], trump: Suit, deck_remaining: usize) -> f64 {
        let pts = points(candidate);
        let pts_f = f64::from(pts);
        let candidate_trump = is_trump(candidate, trump);
        let pool = unknown.len();

        let (avg_points, win_rate) = if pool == 0 {
            (pts_f, 1.0)
        } else {
            let mut expected = 0.0;
            let mut wins = 0usize;
            for &reply in unknown {
                let trick = pts_f + f64::from(points(reply));
                if card_beats(reply, candidate, trump) {
                    expected -= trick;
                } else {
                    expected += trick;
                    wins += 1;
                }
            }
            (expected / pool as f64, wins as f64 / pool as f64)
        };

        let risk = if pts > 0 && !candidate_trump && pool > 0 {
            let trumps = unknown.iter().filter(|&&c| is_trump(c, trump)).count();
            trumps as f64 / pool as f64 * pts_f * EXPOSURE_WEIGHT
        } else {
            0.0
        };

        let opportunity_cost = if candidate_trump && pts > TRUMP_HOLD_MIN_POINTS {
            (pts_f + TRUMP_HOLD_BONUS) * (deck_remaining as f64 / DECK_DEPTH_SCALE)
        } else {
            0.0
        };

        let tactical = (1.0 - win_rate) * NEXT_TRICK_ADVANTAGE - win_rate * NEXT_TRICK_ADVANTAGE;

        avg_points - risk - opportunity_cost + tactical
    }
}

/// First element with the strictly highest score.
fn first_best<S: PartialOrd + Copy>(cards: &[Card], score: impl Fn(Card) -> S) -> Option<Card> {
    let mut best: Option<(Card, S)> = None;
    for &card in cards {
        let s = score(card);
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((card, s)),
        }
    }
    best.map(|(card, _)| card)
}

impl AiPlayer for Maestro {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let trump = view.trump();

        let choice = match view.table {
            Some(table) => first_best(&legal, |c| Self::response_score(table, c, trump)),
            None => {
                let unknown = view.unknown_cards();
                first_best(&legal, |c| {
                    Self::lead_score(c, &unknown, trump, view.deck_remaining)
                })
            }
        };
        choice.ok_or_else(|| AiError::Internal("no candidate scored".into()))
    }
}
