//! Leaderboard persisted as a pretty-printed JSON array.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AppError;
use crate::leaderboard::LeaderboardEntry;
use crate::ports::LeaderboardStore;

/// File name used when no path is configured.
pub const DEFAULT_FILE: &str = "briscola_charts.json";

#[derive(Debug, Clone)]
pub struct JsonFileLeaderboard {
    path: PathBuf,
}

impl JsonFileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileLeaderboard {
    fn load(&self) -> Vec<LeaderboardEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no leaderboard yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "leaderboard unreadable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "leaderboard corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), entries = entries.len(), "leaderboard saved");
        Ok(())
    }
}
