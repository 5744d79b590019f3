//! Pieces used only by the `briscola` binary.

pub mod cli;
pub mod leaderboard_view;
pub mod session;
