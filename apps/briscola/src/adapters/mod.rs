//! Adapters for external dependencies.

pub mod leaderboard_json;
pub mod leaderboard_memory;
pub mod match_logs;
pub mod narrator;
pub mod terminal_input;
