//! In-memory game sessions keyed by game id.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::ai::{for_difficulty, AiPlayer};
use crate::domain::rules::PLAYERS;
use crate::domain::GameState;
use crate::error::EngineError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;

pub type GameId = i64;

/// One game plus the AI players seated in it.
pub struct GameSession {
    pub id: GameId,
    pub state: GameState,
    ais: [Option<Box<dyn AiPlayer + Send + Sync>>; PLAYERS],
}

impl GameSession {
    pub fn new(id: GameId, state: GameState) -> Self {
        let ais = std::array::from_fn(|seat| state.players[seat].difficulty().map(for_difficulty));
        Self { id, state, ais }
    }

    pub fn ai(&self, seat: u8) -> Option<&(dyn AiPlayer + Send + Sync)> {
        self.ais.get(seat as usize).and_then(|a| a.as_deref())
    }
}

/// Registry of live games. Each game sits behind its own mutex so one
/// action runs at a time per game while distinct games proceed in parallel.
#[derive(Default)]
pub struct GameRegistry {
    games: DashMap<GameId, Arc<Mutex<GameSession>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: GameSession) -> Result<Arc<Mutex<GameSession>>, EngineError> {
        let id = session.id;
        match self.games.entry(id) {
            Entry::Occupied(_) => Err(EngineError::conflict(
                ErrorCode::GameExists,
                format!("Game {id} already exists"),
            )),
            Entry::Vacant(slot) => {
                let handle = Arc::new(Mutex::new(session));
                slot.insert(Arc::clone(&handle));
                Ok(handle)
            }
        }
    }

    /// Handle to a game; the map guard is released before the caller locks it.
    pub fn get(&self, id: GameId) -> Result<Arc<Mutex<GameSession>>, EngineError> {
        self.games
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")).into()
            })
    }

    pub fn remove(&self, id: GameId) -> Option<Arc<Mutex<GameSession>>> {
        self.games.remove(&id).map(|(_, handle)| handle)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
