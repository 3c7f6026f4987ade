use tracing::{debug, info};

use super::mutation::Draft;
use super::GameFlowService;
use crate::ai::AiError;
use crate::domain::player_view::VisibleGameState;
use crate::domain::{Phase, Seat};
use crate::error::EngineError;
use crate::errors::domain::DomainError;

/// Type of action needed from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ActionType {
    Bid,
    Discard,
    Play,
}

impl ActionType {
    fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Bid => Some(Self::Bid),
            Phase::Kitty => Some(Self::Discard),
            Phase::Play => Some(Self::Play),
            _ => None,
        }
    }
}

impl GameFlowService {
    /// Ask the AI at `seat` for its decision and apply it to the draft.
    ///
    /// AI decisions go through the same validation as human actions; an
    /// illegal choice surfaces as an error rather than being retried.
    pub(super) fn execute_ai_turn(
        &self,
        draft: &mut Draft<'_>,
        seat: Seat,
    ) -> Result<(), EngineError> {
        let action = ActionType::for_phase(draft.state.phase).ok_or_else(|| {
            DomainError::invariant(format!("No AI action during {:?}", draft.state.phase))
        })?;
        let ai = draft.ai(seat).ok_or_else(|| {
            DomainError::invariant(format!("Seat {seat} is AI but has no player attached"))
        })?;

        let view = VisibleGameState::for_seat(&draft.state, seat);
        match action {
            ActionType::Bid => {
                let decision = ai.choose_bid(&view)?;
                draft.state.hand.ai_best[seat as usize] = decision.best;
                draft.bid(seat, decision.choice)?;
            }
            ActionType::Discard => {
                let discards = ai.choose_discard(&view)?;
                draft.discard(seat, &discards)?;
            }
            ActionType::Play => {
                let card = ai.choose_play(&view)?;
                if !view.legal_plays().contains(&card) {
                    return Err(AiError::InvalidMove(format!(
                        "{} chose {card}, which is not a legal play",
                        ai.name()
                    ))
                    .into());
                }
                debug!(game_id = draft.game_id, seat, %card, "AI card chosen");
                draft.play(seat, card)?;
            }
        }

        info!(
            game_id = draft.game_id,
            seat,
            ai = ai.name(),
            action = ?action,
            "AI action executed"
        );
        Ok(())
    }
}
