use crate::ai::AiPlayer;
use crate::domain::player_view::PlayerView;
use crate::error::AppError;
use crate::ports::{HumanChoice, HumanInput};

/// Seats an AI in the human chair. Never forfeits.
pub struct AutopilotInput {
    ai: Box<dyn AiPlayer>,
}

impl AutopilotInput {
    pub fn new(ai: Box<dyn AiPlayer>) -> Self {
        Self { ai }
    }
}

impl HumanInput for AutopilotInput {
    fn choose_card(&mut self, view: &PlayerView) -> Result<HumanChoice, AppError> {
        Ok(HumanChoice::Play(self.ai.choose_play(view)?))
    }
}
