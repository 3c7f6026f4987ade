//! Domain layer: pure game rules, no I/O.

pub mod bid_eval;
pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod game_transition;
pub mod kitty;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_kitty;
#[cfg(test)]
mod tests_props_bid_eval;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bid_eval::{evaluate_all, forced_minimum_bid, run_strength, BidCandidate};
pub use bidding::{Bid, BidChoice, FinalBid};
pub use cards_logic::{card_beats, hand_has_suit, Contract};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Direction, Rank, Suit};
pub use events::GameEvent;
pub use player_view::VisibleGameState;
pub use state::{Difficulty, GameState, Phase, Player, PlayerKind, Seat, Team};
