//! Standing of one side in a best-of-N match, between games.

use std::fmt;

use crate::domain::rules::games_to_win;

/// Where a side stands relative to the match target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outlook {
    /// Already at or past the target.
    Secured,
    /// Cannot reach the target even by winning every remaining game.
    Impossible,
    /// Reaches the target only by winning every remaining game.
    MustWinAll { wins_needed: u32 },
    /// Still needs `points` match points, e.g. `wins_needed` of the remaining games.
    Needs { points: f64, wins_needed: u32 },
}

/// Outlook for a side holding `match_points` after `played` of `games` games.
///
/// Returns `None` once no games remain.
pub fn outlook(match_points: f64, games: u8, played: u8) -> Option<Outlook> {
    let remaining = games.saturating_sub(played) as u32;
    if remaining == 0 {
        return None;
    }
    let missing = games_to_win(games) - match_points;
    if missing <= 0.0 {
        return Some(Outlook::Secured);
    }
    let wins_needed = missing.ceil() as u32;
    let result = if wins_needed > remaining {
        Outlook::Impossible
    } else if wins_needed == remaining {
        Outlook::MustWinAll { wins_needed }
    } else {
        Outlook::Needs {
            points: missing,
            wins_needed,
        }
    };
    Some(result)
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outlook::Secured => write!(f, "SECURED"),
            Outlook::Impossible => write!(f, "IMPOSSIBLE"),
            Outlook::MustWinAll { wins_needed } => write!(f, "MUST_WIN_ALL {wins_needed}"),
            Outlook::Needs {
                points,
                wins_needed,
            } => write!(f, "NEEDS {points} WINS {wins_needed}"),
        }
    }
}
