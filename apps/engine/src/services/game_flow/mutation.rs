use tracing::{debug, warn};

use super::GameFlowService;
use crate::ai::AiPlayer;
use crate::domain::bidding::{self, BidChoice, BidOutcome, FinalBid};
use crate::domain::player_view::VisibleGameState;
use crate::domain::state::{require_seat, Seat};
use crate::domain::{kitty, tricks, Card, Direction, GameEvent, GameState, Suit};
use crate::error::EngineError;
use crate::services::sessions::{GameId, GameSession};

/// What every action hands back: the caller's view plus the events it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub view: VisibleGameState,
    pub events: Vec<GameEvent>,
}

/// Working copy of a game for one action. Committed only if the whole
/// action, cascade included, succeeds.
pub(super) struct Draft<'a> {
    pub game_id: GameId,
    pub state: GameState,
    pub events: Vec<GameEvent>,
    session: &'a GameSession,
}

impl<'a> Draft<'a> {
    fn new(session: &'a GameSession) -> Self {
        Self {
            game_id: session.id,
            state: session.state.clone(),
            events: Vec::new(),
            session,
        }
    }

    pub fn ai(&self, seat: Seat) -> Option<&'a (dyn AiPlayer + Send + Sync)> {
        self.session.ai(seat)
    }

    pub fn bid(&mut self, seat: Seat, choice: BidChoice) -> Result<(), EngineError> {
        let outcome = bidding::submit_bid(&mut self.state, seat, choice)?;
        debug!(game_id = self.game_id, seat, ?choice, ?outcome, "Bid recorded");
        self.events.push(GameEvent::Bid { seat, choice });
        if let BidOutcome::Finalized { final_bid, .. } = outcome {
            self.reveal(final_bid);
        }
        Ok(())
    }

    pub fn finalize(
        &mut self,
        seat: Seat,
        direction: Direction,
        suit: Option<Suit>,
    ) -> Result<(), EngineError> {
        let final_bid = bidding::finalize_bid(&mut self.state, seat, direction, suit)?;
        self.reveal(final_bid);
        Ok(())
    }

    fn reveal(&mut self, final_bid: FinalBid) {
        debug!(game_id = self.game_id, ?final_bid, "Contract fixed");
        self.events.push(GameEvent::Reveal {
            seat: final_bid.seat,
            final_bid,
        });
    }

    pub fn discard(&mut self, seat: Seat, cards: &[Card]) -> Result<(), EngineError> {
        kitty::apply_discard(&mut self.state, seat, cards)?;
        debug!(game_id = self.game_id, seat, "Kitty exchanged");
        Ok(())
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), EngineError> {
        let result = tricks::play_card(&mut self.state, seat, card)?;
        self.events.push(GameEvent::Play { seat, card });
        if let Some(winner) = result.trick_winner {
            debug!(
                game_id = self.game_id,
                trick_no = result.trick_no,
                winner,
                "Trick collected"
            );
            self.events.push(GameEvent::Collect {
                trick_no: result.trick_no,
                winner,
            });
            self.events.push(GameEvent::Clear);
        }
        Ok(())
    }

    fn into_parts(self) -> (GameState, Vec<GameEvent>) {
        (self.state, self.events)
    }
}

impl GameFlowService {
    /// Run `action` and the AI cascade against a copy of the session's
    /// state; commit only on success.
    pub(super) fn run_action<F>(
        &self,
        session: &mut GameSession,
        seat: u8,
        action: &'static str,
        f: F,
    ) -> Result<ActionOutcome, EngineError>
    where
        F: FnOnce(&mut Draft<'_>) -> Result<(), EngineError>,
    {
        let game_id = session.id;
        let seat = require_seat(seat)?;

        let mut draft = Draft::new(session);
        let result = f(&mut draft).and_then(|_| self.process_game_state(&mut draft));
        match result {
            Ok(()) => {
                let (state, events) = draft.into_parts();
                session.state = state;
                Ok(ActionOutcome {
                    view: VisibleGameState::for_seat(&session.state, seat),
                    events,
                })
            }
            Err(err) => {
                warn!(game_id, seat, action, code = %err.code(), error = %err, "Action rejected");
                Err(err)
            }
        }
    }

    /// Lock a registered game and run `action` on it.
    pub(super) fn mutate<F>(
        &self,
        game_id: GameId,
        seat: u8,
        action: &'static str,
        f: F,
    ) -> Result<ActionOutcome, EngineError>
    where
        F: FnOnce(&mut Draft<'_>) -> Result<(), EngineError>,
    {
        let handle = self.games.get(game_id)?;
        let mut session = handle.lock();
        self.run_action(&mut session, seat, action, f)
    }
}
