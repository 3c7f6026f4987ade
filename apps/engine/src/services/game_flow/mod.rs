//! Game flow service: applies player actions to in-memory games and runs
//! AI turns until a human must act.
//!
//! Every public action follows the same shape: lock the game, apply the
//! action to a copy of its state, cascade automatic turns, then commit and
//! return the caller's view with the events produced.

mod ai_coordinator;
mod mutation;
mod orchestration;
mod player_actions;
mod round_lifecycle;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::services::sessions::GameRegistry;

pub use mutation::ActionOutcome;

/// Game flow service. Owns the registry of live games.
pub struct GameFlowService {
    config: EngineConfig,
    games: GameRegistry,
}

impl GameFlowService {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            games: GameRegistry::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn games(&self) -> &GameRegistry {
        &self.games
    }
}
