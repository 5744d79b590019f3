//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod game;
pub mod match_play;
pub mod match_summary;
pub mod player;
pub mod player_view;
pub mod rules;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_game;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, comp_value, is_trump, points};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{full_deck, Deck};
pub use game::{Game, GameOutcome, GameResult, TrickStep};
pub use match_play::{Match, MatchCollaborators, MatchRecord, MatchResult};
pub use player::Player;
pub use player_view::PlayerView;
pub use state::{Phase, Seat};
pub use tricks::{resolve_trick, Trick};
