//! Contracts between the engine and its external collaborators.
//!
//! The engine never performs I/O; front ends and adapters implement these.

use crate::domain::events::MatchEvent;
use crate::domain::player_view::PlayerView;
use crate::domain::Card;
use crate::error::AppError;
use crate::leaderboard::LeaderboardEntry;

/// What the human seat decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanChoice {
    /// Play this card; it must be in `view.hand`.
    Play(Card),
    /// Abandon the match.
    Forfeit,
}

/// Card selection for the human seat.
///
/// Implementations handle malformed input themselves (re-prompting) and only
/// return a card from the hand or a forfeit. The call may block indefinitely.
pub trait HumanInput {
    fn choose_card(&mut self, view: &PlayerView) -> Result<HumanChoice, AppError>;
}

/// Line-oriented event sink for narration and optional persistence.
pub trait MatchLog {
    fn record(&mut self, event: &MatchEvent);
}

/// Persistent leaderboard.
///
/// `load` treats a missing or unreadable store as empty.
pub trait LeaderboardStore {
    fn load(&self) -> Vec<LeaderboardEntry>;
    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError>;
}

impl<T: MatchLog + ?Sized> MatchLog for &mut T {
    fn record(&mut self, event: &MatchEvent) {
        (**self).record(event);
    }
}
