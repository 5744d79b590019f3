use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 3;
/// Sum of trick points over the whole deck: 4 × (11 + 10 + 4 + 3 + 2).
pub const TOTAL_POINTS: u16 = 120;
/// A game is won with strictly more than half the points; exactly half is a draw.
pub const WINNING_THRESHOLD: u16 = TOTAL_POINTS / 2;
pub const MATCH_LENGTHS: RangeInclusive<u8> = 1..=11;

pub const WIN_MATCH_POINTS: f64 = 1.0;
pub const TIE_MATCH_POINTS: f64 = 0.5;

/// Match points from a win/tie record.
pub fn match_points(wins: u32, ties: u32) -> f64 {
    wins as f64 * WIN_MATCH_POINTS + ties as f64 * TIE_MATCH_POINTS
}

/// Match points that put a best-of-`games` match out of reach.
pub fn games_to_win(games: u8) -> f64 {
    games as f64 / 2.0 + 0.5
}

pub fn valid_match_length(games: u8) -> bool {
    MATCH_LENGTHS.contains(&games)
}
