//! Leaderboard entries and ranking.
//!
//! Storage lives behind [`crate::ports::LeaderboardStore`]; this module only
//! knows how entries are built, ordered and trimmed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::domain::match_play::MatchRecord;
use crate::domain::rules::match_points;
use crate::error::AppError;
use crate::ports::LeaderboardStore;

/// Entries kept after ranking.
pub const MAX_ENTRIES: usize = 30;

/// One match winner. Field aliases accept files written by older Italian
/// releases of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(alias = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(alias = "punti_totali", default)]
    pub total_points: u32,
    /// `dd/mm/yyyy`
    #[serde(alias = "data", default)]
    pub date: String,
}

impl LeaderboardEntry {
    pub fn from_record(name: &str, record: &MatchRecord, date: String) -> Self {
        Self {
            name: name.to_string(),
            wins: record.wins,
            ties: record.ties,
            losses: record.losses,
            total_points: record.total_points,
            date,
        }
    }

    pub fn match_points(&self) -> f64 {
        match_points(self.wins, self.ties)
    }

    /// `wins-ties-losses`
    pub fn score_line(&self) -> String {
        format!("{}-{}-{}", self.wins, self.ties, self.losses)
    }
}

/// Best first: match points, wins, fewer losses, card points.
fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.match_points()
        .total_cmp(&a.match_points())
        .then(b.wins.cmp(&a.wins))
        .then(a.losses.cmp(&b.losses))
        .then(b.total_points.cmp(&a.total_points))
}

/// Sort best first (stable for equal keys) and keep the top [`MAX_ENTRIES`].
pub fn rank_entries(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(compare);
    entries.truncate(MAX_ENTRIES);
}

/// Append `entry` to the stored board, re-rank and save.
pub fn record_result(
    store: &dyn LeaderboardStore,
    entry: LeaderboardEntry,
) -> Result<Vec<LeaderboardEntry>, AppError> {
    let mut entries = store.load();
    entries.push(entry);
    rank_entries(&mut entries);
    store.save(&entries)?;
    Ok(entries)
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Today's date, local time when the offset is known.
pub fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_date(now.date())
}
