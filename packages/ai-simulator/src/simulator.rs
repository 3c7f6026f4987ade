//! Runs AI-only games through the engine's public service and turns the
//! returned event stream into per-hand history.

use bidwhist_engine::domain::bidding::FinalBid;
use bidwhist_engine::{
    BidChoice, Difficulty, EngineConfig, EngineError, GameEvent, GameFlowService, Player, Seat,
    Team,
};

const PLAYERS: usize = 4;

/// One hand reconstructed from events.
#[derive(Debug, Clone, Default)]
pub struct HandRecord {
    pub hand_no: u32,
    pub first_bidder: Seat,
    pub bids: [Option<BidChoice>; PLAYERS],
    pub final_bid: Option<FinalBid>,
    /// Tricks taken per seat.
    pub tricks: [u8; PLAYERS],
    pub delta: i32,
    /// Cumulative team scores after this hand.
    pub scores: [i32; 2],
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: [i32; 2],
    pub winner: Team,
    pub hands: Vec<HandRecord>,
}

/// Plays whole games with AI at every seat.
///
/// Each game is a single `start_hand` call: the engine's cascade runs every
/// AI turn until the game ends.
pub struct Simulator {
    service: GameFlowService,
}

impl Simulator {
    pub fn new(base_seed: i64) -> Result<Self, EngineError> {
        let config = EngineConfig {
            game_seed: Some(base_seed),
            ..EngineConfig::from_env()?
        };
        Ok(Self {
            service: GameFlowService::new(config)?,
        })
    }

    /// Simulate game `game_id` with the given tier at each seat.
    pub fn simulate_game(
        &self,
        game_id: i64,
        seats: &[Difficulty; PLAYERS],
    ) -> Result<GameResult, SimulatorError> {
        let players: [Player; PLAYERS] =
            std::array::from_fn(|seat| Player::ai(seat as Seat, seats[seat]));
        let outcome = self.service.start_hand(game_id, players, 0)?;
        self.service.abandon_game(game_id, 0)?;

        let winner = outcome.view.winner.ok_or(SimulatorError::Unfinished(game_id))?;
        Ok(GameResult {
            final_scores: outcome.view.scores,
            winner,
            hands: replay_hands(&outcome.events),
        })
    }
}

/// Split an event stream into hands.
pub fn replay_hands(events: &[GameEvent]) -> Vec<HandRecord> {
    let mut hands = Vec::new();
    let mut current: Option<HandRecord> = None;

    for event in events {
        match event {
            GameEvent::Deal {
                hand_no,
                first_bidder,
            } => {
                current = Some(HandRecord {
                    hand_no: *hand_no,
                    first_bidder: *first_bidder,
                    ..HandRecord::default()
                });
            }
            GameEvent::Bid { seat, choice } => {
                if let Some(hand) = current.as_mut() {
                    hand.bids[*seat as usize] = Some(*choice);
                }
            }
            GameEvent::Reveal { final_bid, .. } => {
                if let Some(hand) = current.as_mut() {
                    hand.final_bid = Some(*final_bid);
                }
            }
            GameEvent::Collect { winner, .. } => {
                if let Some(hand) = current.as_mut() {
                    hand.tricks[*winner as usize] += 1;
                }
            }
            GameEvent::Score { delta, scores, .. } => {
                if let Some(mut hand) = current.take() {
                    hand.delta = *delta;
                    hand.scores = *scores;
                    hands.push(hand);
                }
            }
            GameEvent::Play { .. }
            | GameEvent::Clear
            | GameEvent::Win { .. }
            | GameEvent::Quit { .. } => {}
        }
    }
    hands
}

#[derive(Debug)]
pub enum SimulatorError {
    Engine(EngineError),
    Unfinished(i64),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Engine(e) => write!(f, "Engine error: {e}"),
            SimulatorError::Unfinished(id) => write!(f, "Game {id} stopped without a winner"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<EngineError> for SimulatorError {
    fn from(err: EngineError) -> Self {
        SimulatorError::Engine(err)
    }
}
