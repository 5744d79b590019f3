//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::domain::Card;
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI was asked to move without a legal option, or produced an invalid one
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::ai(err.to_string())
    }
}

/// Trait for AI players.
///
/// Implementations receive what their seat can see and must return a card
/// from `view.legal_plays()`. Methods take `&self`; implementations with
/// mutable state keep it behind a lock.
pub trait AiPlayer: Send + Sync {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
