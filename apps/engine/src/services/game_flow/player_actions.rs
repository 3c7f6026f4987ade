use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::mutation::{ActionOutcome, Draft};
use super::GameFlowService;
use crate::domain::game_transition;
use crate::domain::player_view::VisibleGameState;
use crate::domain::rules::PLAYERS;
use crate::domain::seed_derivation::derive_game_seed;
use crate::domain::state::require_seat;
use crate::domain::{BidChoice, Card, Direction, GameEvent, GameState, Phase, Player, Suit};
use crate::error::EngineError;
use crate::services::sessions::{GameId, GameSession};

impl GameFlowService {
    /// Create game `game_id` with `players`, deal the first hand and run
    /// any AI turns up to the first human decision.
    ///
    /// Returns the view for `seat`. The game is only registered if the
    /// whole start succeeds.
    pub fn start_hand(
        &self,
        game_id: GameId,
        players: [Player; PLAYERS],
        seat: u8,
    ) -> Result<ActionOutcome, EngineError> {
        let seat = require_seat(seat)?;
        let game_seed = match self.config.game_seed {
            Some(base) => derive_game_seed(base, game_id),
            None => StdRng::from_os_rng().random(),
        };
        info!(game_id, game_seed, "Starting game");

        let state = GameState::new(players, game_seed)?;
        let mut session = GameSession::new(game_id, state);
        let outcome = self.run_action(&mut session, seat, "start_hand", |draft| {
            self.begin_hand(draft).map(|_| ())
        })?;

        self.games.insert(session)?;
        Ok(outcome)
    }

    /// Submit `choice` for `seat`, then run the AI cascade.
    pub fn submit_bid(
        &self,
        game_id: GameId,
        seat: u8,
        choice: BidChoice,
    ) -> Result<ActionOutcome, EngineError> {
        debug!(game_id, seat, ?choice, "Submitting bid");
        self.mutate(game_id, seat, "submit_bid", |draft| draft.bid(seat, choice))
    }

    /// Human bid winner fixes direction and trump (None for no-trump).
    pub fn finalize_bid(
        &self,
        game_id: GameId,
        seat: u8,
        direction: Direction,
        suit: Option<Suit>,
    ) -> Result<ActionOutcome, EngineError> {
        debug!(game_id, seat, ?direction, ?suit, "Finalizing bid");
        self.mutate(game_id, seat, "finalize_bid", |draft| {
            draft.finalize(seat, direction, suit)
        })
    }

    /// Return six cards to the kitty and begin play.
    pub fn apply_kitty_discard(
        &self,
        game_id: GameId,
        seat: u8,
        discards: &[Card],
    ) -> Result<ActionOutcome, EngineError> {
        debug!(game_id, seat, count = discards.len(), "Applying kitty discard");
        self.mutate(game_id, seat, "apply_kitty_discard", |draft| {
            draft.discard(seat, discards)
        })
    }

    /// Play `card` for `seat`. Completing a trick, hand or game happens
    /// inside this call, as do any AI turns that follow.
    pub fn play_card(
        &self,
        game_id: GameId,
        seat: u8,
        card: Card,
    ) -> Result<ActionOutcome, EngineError> {
        debug!(game_id, seat, %card, "Playing card");
        self.mutate(game_id, seat, "play_card", |draft| draft.play(seat, card))
    }

    /// Seat-scoped view of the game, without mutating it.
    pub fn view(&self, game_id: GameId, seat: u8) -> Result<VisibleGameState, EngineError> {
        let seat = require_seat(seat)?;
        let handle = self.games.get(game_id)?;
        let session = handle.lock();
        Ok(VisibleGameState::for_seat(&session.state, seat))
    }

    /// End the game early on behalf of `seat` and drop it from the registry.
    ///
    /// A game already in `End` is closed without a `Quit` event.
    pub fn abandon_game(&self, game_id: GameId, seat: u8) -> Result<ActionOutcome, EngineError> {
        let outcome = self.mutate(game_id, seat, "abandon_game", |draft| abandon(draft, seat))?;
        self.games.remove(game_id);
        if outcome.events.is_empty() {
            info!(game_id, "Finished game closed");
        } else {
            warn!(game_id, seat, "Game abandoned");
        }
        Ok(outcome)
    }
}

fn abandon(draft: &mut Draft<'_>, seat: u8) -> Result<(), EngineError> {
    if draft.state.phase == Phase::End {
        return Ok(());
    }
    game_transition::abandon(&mut draft.state)?;
    draft.events.push(GameEvent::Quit { seat });
    Ok(())
}
