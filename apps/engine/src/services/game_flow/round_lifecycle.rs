use tracing::info;

use super::mutation::Draft;
use super::GameFlowService;
use crate::domain::game_transition::{self, HandStart};
use crate::domain::scoring::{apply_hand_scoring, HandScore};
use crate::domain::GameEvent;
use crate::error::EngineError;

impl GameFlowService {
    /// Shuffle, deal and open bidding for the next hand.
    ///
    /// Valid from `Initiated` (first hand) or `Score` (subsequent hands).
    pub(super) fn begin_hand(&self, draft: &mut Draft<'_>) -> Result<HandStart, EngineError> {
        let start = game_transition::start_hand(&mut draft.state)?;
        info!(
            game_id = draft.game_id,
            hand_no = start.hand_no,
            first_bidder = start.first_bidder,
            "Dealing new hand"
        );
        draft.events.push(GameEvent::Deal {
            hand_no: start.hand_no,
            first_bidder: start.first_bidder,
        });
        Ok(start)
    }

    /// Score the completed hand; deal the next one unless the game ended.
    pub(super) fn finish_hand(&self, draft: &mut Draft<'_>) -> Result<HandScore, EngineError> {
        let score = apply_hand_scoring(
            &mut draft.state,
            self.config.winning_score,
            self.config.losing_score,
        )?;
        info!(
            game_id = draft.game_id,
            hand_no = draft.state.hand_no,
            bidder_team = ?score.bidder_team,
            tricks = score.tricks,
            made = score.made,
            delta = score.delta,
            scores = ?score.scores,
            "Hand scored"
        );
        draft.events.push(GameEvent::Score {
            team: score.bidder_team,
            delta: score.delta,
            scores: score.scores,
        });

        match score.game_winner {
            Some(team) => {
                info!(game_id = draft.game_id, winner = ?team, scores = ?score.scores, "Game won");
                draft.events.push(GameEvent::Win {
                    team,
                    scores: score.scores,
                });
            }
            None => {
                self.begin_hand(draft)?;
            }
        }
        Ok(score)
    }
}
