use std::sync::{Mutex, PoisonError};

use crate::error::AppError;
use crate::leaderboard::LeaderboardEntry;
use crate::ports::LeaderboardStore;

/// Process-local leaderboard for tests and the simulator.
#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl InMemoryLeaderboard {
    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl LeaderboardStore for InMemoryLeaderboard {
    fn load(&self) -> Vec<LeaderboardEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError> {
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::record_result;

    #[test]
    fn record_result_appends_and_ranks() {
        let store = InMemoryLeaderboard::default();
        let e = |name: &str, wins| LeaderboardEntry {
            name: name.into(),
            wins,
            ties: 0,
            losses: 0,
            total_points: 0,
            date: String::new(),
        };
        record_result(&store, e("Anna", 1)).unwrap();
        let ranked = record_result(&store, e("Bruno", 3)).unwrap();
        assert_eq!(ranked[0].name, "Bruno");
        assert_eq!(store.load(), ranked);
    }
}
