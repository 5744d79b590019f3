#![allow(dead_code)]

// tests/common/mod.rs
use briscola::domain::cards_parsing::try_parse_cards;
use briscola::domain::PlayerView;
use briscola::{AppError, Card, HumanChoice, HumanInput, Seat};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    briscola_test_support::logging::init();
}

pub fn cards(codes: &[&str]) -> Vec<Card> {
    try_parse_cards(codes).expect("valid card codes")
}

pub fn card(code: &str) -> Card {
    code.parse().expect("valid card code")
}

/// A view for the computer seat; `table` set means responding.
pub fn computer_view(hand: &[&str], table: Option<&str>, trump: &str, played: &[&str]) -> PlayerView {
    let played = cards(played);
    PlayerView {
        seat: Seat::Computer,
        hand: cards(hand),
        trump_card: card(trump),
        table: table.map(card),
        deck_remaining: 40usize.saturating_sub(played.len() + 8),
        played,
        own_score: 0,
        opponent_score: 0,
        trick_no: 1,
    }
}

/// Human stand-in that forfeits on its `n`th decision (1-based).
pub struct QuitAfter {
    pub remaining: usize,
}

impl HumanInput for QuitAfter {
    fn choose_card(&mut self, view: &PlayerView) -> Result<HumanChoice, AppError> {
        if self.remaining <= 1 {
            return Ok(HumanChoice::Forfeit);
        }
        self.remaining -= 1;
        Ok(HumanChoice::Play(view.hand[0]))
    }
}
