//! Match configuration assembled from command-line flags and the environment.

use std::env;
use std::path::PathBuf;

use crate::adapters::leaderboard_json::DEFAULT_FILE;
use crate::domain::rules::{valid_match_length, MATCH_LENGTHS};
use crate::error::AppError;

pub const LEADERBOARD_ENV: &str = "BRISCOLA_LEADERBOARD";
pub const LOG_DIR_ENV: &str = "BRISCOLA_LOG_DIR";

/// Validated settings for one terminal session.
///
/// `player_name` and `games` stay `None` when they must still be asked for
/// interactively.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub player_name: Option<String>,
    pub games: Option<u8>,
    pub seed: Option<u64>,
    pub log_enabled: bool,
    pub prompts: bool,
    pub leaderboard_path: PathBuf,
    pub log_dir: PathBuf,
}

/// Raw, unvalidated options as they come off the command line.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub name: Option<String>,
    pub games: Option<u8>,
    pub seed: Option<u64>,
    pub log: bool,
    pub no_prompt: bool,
    pub leaderboard: Option<PathBuf>,
}

impl MatchConfig {
    pub fn from_options(raw: RawOptions) -> Result<Self, AppError> {
        let player_name = match raw.name {
            Some(name) => Some(normalize_name(&name)?),
            None => None,
        };
        if let Some(games) = raw.games {
            check_match_length(games)?;
        }
        Ok(Self {
            player_name,
            games: raw.games,
            seed: raw.seed,
            log_enabled: raw.log,
            prompts: !raw.no_prompt,
            leaderboard_path: leaderboard_path(raw.leaderboard),
            log_dir: log_dir(),
        })
    }
}

pub fn check_match_length(games: u8) -> Result<u8, AppError> {
    if valid_match_length(games) {
        Ok(games)
    } else {
        Err(AppError::config(format!(
            "match length must be between {} and {}, got {games}",
            MATCH_LENGTHS.start(),
            MATCH_LENGTHS.end()
        )))
    }
}

/// Trim and title-case a player name; empty names are rejected.
pub fn normalize_name(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::config("player name must not be empty".into()));
    }
    Ok(title_case(trimmed))
}

/// Upper-case the first letter of every word, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Flag, then `BRISCOLA_LEADERBOARD`, then the default file in the working directory.
fn leaderboard_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var_os(LEADERBOARD_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}

/// `BRISCOLA_LOG_DIR`, defaulting to the working directory.
fn log_dir() -> PathBuf {
    env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
