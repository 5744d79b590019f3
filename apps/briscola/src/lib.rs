#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod leaderboard;
pub mod ports;

// Re-exports for public API
pub use ai::{AiError, AiPlayer, Maestro, RandomPlayer};
pub use config::MatchConfig;
pub use domain::{Card, Game, Match, MatchCollaborators, MatchResult, Rank, Seat, Suit};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use leaderboard::LeaderboardEntry;
pub use ports::{HumanChoice, HumanInput, LeaderboardStore, MatchLog};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    briscola_test_support::logging::init();
}
