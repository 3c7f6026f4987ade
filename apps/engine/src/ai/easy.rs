//! Easy: always plays its lowest card, following suit when it must.

use crate::ai::policy::{ensure_legal, lowest, of_suit, require_contract};
use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::VisibleGameState;
use crate::domain::Card;

#[derive(Debug, Clone, Default)]
pub struct Easy;

impl Easy {
    pub const NAME: &'static str = "easy";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl AiPlayer for Easy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_play(&self, state: &VisibleGameState) -> Result<Card, AiError> {
        let dir = require_contract(state)?.direction;
        let pick = match state.lead_suit() {
            Some(lead) => lowest(&of_suit(&state.hand, lead), dir).or_else(|| lowest(&state.hand, dir)),
            None => lowest(&state.hand, dir),
        };
        let card = pick.ok_or_else(|| AiError::InvalidMove("empty hand".into()))?;
        ensure_legal(state, card)
    }
}
