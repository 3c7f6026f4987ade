//! AI players: three difficulty tiers behind one trait.
//!
//! Bidding and kitty discards are shared (see `policy`); tiers differ in
//! how they choose cards during play.

mod easy;
mod hard;
mod medium;
pub mod policy;
pub mod registry;
mod trait_def;

pub use easy::Easy;
pub use hard::Hard;
pub use medium::Medium;
pub use registry::{by_name, for_difficulty, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer, BidDecision};
