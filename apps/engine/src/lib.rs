#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{registered_ais, AiPlayer, Easy, Hard, Medium};
pub use config::EngineConfig;
pub use domain::{
    BidChoice, Card, Difficulty, Direction, GameEvent, Phase, Player, Seat, Suit, Team,
    VisibleGameState,
};
pub use error::EngineError;
pub use errors::ErrorCode;
pub use services::game_flow::{ActionOutcome, GameFlowService};
pub use services::sessions::GameId;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
