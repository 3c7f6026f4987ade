//! Medium: leads its highest non-trump card, otherwise plays low.

use crate::ai::policy::{ensure_legal, highest, lowest, non_trump, of_suit, require_contract};
use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::VisibleGameState;
use crate::domain::Card;

#[derive(Debug, Clone, Default)]
pub struct Medium;

impl Medium {
    pub const NAME: &'static str = "medium";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl AiPlayer for Medium {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_play(&self, state: &VisibleGameState) -> Result<Card, AiError> {
        let contract = require_contract(state)?;
        let dir = contract.direction;
        let hand = &state.hand;

        let pick = if state.is_leading() {
            highest(&non_trump(hand, &contract), dir).or_else(|| highest(hand, dir))
        } else {
            state
                .lead_suit()
                .and_then(|lead| lowest(&of_suit(hand, lead), dir))
                .or_else(|| lowest(hand, dir))
        };
        let card = pick.ok_or_else(|| AiError::InvalidMove("empty hand".into()))?;
        ensure_legal(state, card)
    }
}
