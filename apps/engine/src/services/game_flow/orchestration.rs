use tracing::debug;

use super::mutation::Draft;
use super::GameFlowService;
use crate::domain::Phase;
use crate::error::EngineError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

impl GameFlowService {
    /// Advance the game until a human must act or the game ends.
    ///
    /// Each iteration either finishes a scored hand (and deals the next) or
    /// runs one AI turn. Loop-based so a fully automated game never recurses.
    ///
    /// Errors with `InvariantViolation` if the game rests in a transient
    /// phase, and with an internal error if `max_cascade_steps` is exceeded.
    pub(super) fn process_game_state(&self, draft: &mut Draft<'_>) -> Result<(), EngineError> {
        let max_steps = self.config.max_cascade_steps;

        for _step in 0..max_steps {
            match draft.state.phase {
                Phase::End => return Ok(()),
                Phase::Score => {
                    self.finish_hand(draft)?;
                    continue;
                }
                Phase::Bid | Phase::Kitty | Phase::Play => {}
                other => {
                    return Err(DomainError::invariant(format!(
                        "Game {} resting in transient phase {other:?}",
                        draft.game_id
                    ))
                    .into())
                }
            }

            let Some(seat) = draft.state.turn else {
                return Err(DomainError::invariant(format!(
                    "No seat to act during {:?}",
                    draft.state.phase
                ))
                .into());
            };

            if !draft.state.is_ai(seat) {
                debug!(game_id = draft.game_id, seat, "Human seat to act, stopping cascade");
                return Ok(());
            }

            self.execute_ai_turn(draft, seat)?;
        }

        Err(EngineError::internal(
            ErrorCode::InvariantViolation,
            format!("process_game_state exceeded max steps {max_steps}"),
        ))
    }
}
